use crate::{
    TypeTag, ValidationError,
    constants::{ADDRESS_HEX_LENGTH, ADDRESS_LENGTH, ADDRESS_PREFIX, ADDRESS_REGEX},
    utils::matches_pattern,
};

impl TypeTag {
    /// Checksum casing is not verified; any mix of upper and lower case hex is accepted.
    pub(crate) fn check_address(&self, value: &str) -> Result<(), ValidationError> {
        if !value.starts_with(ADDRESS_PREFIX) {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                format!("address must start with '{}'", ADDRESS_PREFIX),
            ));
        }

        if value.len() != ADDRESS_LENGTH {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                format!("address must be exactly {} characters", ADDRESS_LENGTH),
            ));
        }

        if !matches_pattern(value, &ADDRESS_REGEX) {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                format!(
                    "address must contain {} hexadecimal characters after '{}'",
                    ADDRESS_HEX_LENGTH, ADDRESS_PREFIX
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0x0123456789012345678901234567890123456789", true)]
    #[case("0xabcdefABCDEF0123456789abcdefABCDEF012345", true)]
    #[case("0x123", false)]
    #[case("0x01234567890123456789012345678901234567890", false)]
    #[case("0123456789012345678901234567890123456789", false)]
    #[case("0X0123456789012345678901234567890123456789", false)]
    #[case("0x012345678901234567890123456789012345678g", false)]
    #[case("", false)]
    fn address_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(TypeTag::Address.check(value).is_ok(), expected);
    }

    #[test]
    fn test_address_too_short() {
        let result = TypeTag::Address.check("0x123");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid address literal '0x123': address must be exactly 42 characters"
        );
    }

    #[test]
    fn test_address_missing_prefix() {
        let result = TypeTag::Address.check("0123456789012345678901234567890123456789");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid address literal '0123456789012345678901234567890123456789': address must start with '0x'"
        );
    }

    #[test]
    fn test_address_non_hex() {
        let result = TypeTag::Address.check("0x012345678901234567890123456789012345678g");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid address literal '0x012345678901234567890123456789012345678g': address must contain 40 hexadecimal characters after '0x'"
        );
    }
}
