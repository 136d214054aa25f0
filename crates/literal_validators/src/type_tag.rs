use log::debug;

use crate::{ValidationError, config::LargeIntegerPolicy};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Names the literal type a candidate string is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// An unsigned decimal integer of any length.
    Uint,
    /// An unsigned 8-bit integer.
    Uint8,
    /// An unsigned 16-bit integer in canonical form.
    Uint16,
    /// A signed decimal integer of any length.
    Int,
    /// A signed 8-bit integer.
    Int8,
    /// A signed 16-bit integer.
    Int16,
    /// A `true` or `false` literal.
    Bool,
    /// A `0x` prefixed, 20-byte hex address.
    Address,
    /// An arbitrary-precision integer.
    LargeInteger,
}

impl TypeTag {
    /// Every supported tag, in declaration order.
    pub const ALL: [TypeTag; 9] = [
        TypeTag::Uint,
        TypeTag::Uint8,
        TypeTag::Uint16,
        TypeTag::Int,
        TypeTag::Int8,
        TypeTag::Int16,
        TypeTag::Bool,
        TypeTag::Address,
        TypeTag::LargeInteger,
    ];

    /// Checks `value` against this type using the default large integer policy.
    ///
    /// # Arguments
    /// * `value` - The candidate literal.
    ///
    /// # Returns
    /// `Ok(())` if the literal is valid, or a [`ValidationError::InvalidFormat`] describing why not.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        self.check_with_policy(value, &LargeIntegerPolicy::default())
    }

    pub(crate) fn check_with_policy(
        &self,
        value: &str,
        policy: &LargeIntegerPolicy,
    ) -> Result<(), ValidationError> {
        let result = match self {
            TypeTag::Uint => self.check_uint(value),
            TypeTag::Uint8 => self.check_uint8(value),
            TypeTag::Uint16 => self.check_uint16(value),
            TypeTag::Int => self.check_int(value),
            TypeTag::Int8 => self.check_int8(value),
            TypeTag::Int16 => self.check_int16(value),
            TypeTag::Bool => self.check_bool(value),
            TypeTag::Address => self.check_address(value),
            TypeTag::LargeInteger => self.check_large_integer(value, policy),
        };
        result.inspect_err(|e| debug!("{}", e))
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            TypeTag::Uint => "uint",
            TypeTag::Uint8 => "uint8",
            TypeTag::Uint16 => "uint16",
            TypeTag::Int => "int",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Bool => "bool",
            TypeTag::Address => "address",
            TypeTag::LargeInteger => "largeInteger",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TypeTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.to_string() == s)
            .ok_or_else(|| ValidationError::UnknownTypeTag {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("uint", TypeTag::Uint)]
    #[case("uint8", TypeTag::Uint8)]
    #[case("uint16", TypeTag::Uint16)]
    #[case("int", TypeTag::Int)]
    #[case("int8", TypeTag::Int8)]
    #[case("int16", TypeTag::Int16)]
    #[case("bool", TypeTag::Bool)]
    #[case("address", TypeTag::Address)]
    #[case("largeInteger", TypeTag::LargeInteger)]
    fn type_tag_from_str(#[case] input: &str, #[case] expected: TypeTag) {
        assert_eq!(TypeTag::from_str(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("uint256")]
    #[case("Bool")]
    #[case("")]
    fn type_tag_from_str_invalid(#[case] input: &str) {
        let result = TypeTag::from_str(input);
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("Unknown type tag: {}", input)
        );
    }

    #[rstest]
    #[case(TypeTag::Uint, "1234")]
    #[case(TypeTag::Uint8, "255")]
    #[case(TypeTag::Uint16, "42000")]
    #[case(TypeTag::Int, "-543")]
    #[case(TypeTag::Int8, "-42")]
    #[case(TypeTag::Int16, "12345")]
    #[case(TypeTag::Bool, "false")]
    #[case(TypeTag::Address, "0x0123456789012345678901234567890123456789")]
    #[case(TypeTag::LargeInteger, "-0xff")]
    fn check_dispatches_to_type(#[case] tag: TypeTag, #[case] value: &str) {
        assert!(tag.check(value).is_ok());
    }

    #[test]
    fn check_reports_type_in_error() {
        let result = TypeTag::Int8.check("128");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid int8 literal '128': value is out of range for int8"
        );
    }
}
