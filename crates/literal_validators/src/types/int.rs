use std::str::FromStr;

use crate::{TypeTag, ValidationError, constants::INT_REGEX, utils::matches_pattern};

impl TypeTag {
    pub(crate) fn check_int(&self, value: &str) -> Result<(), ValidationError> {
        if !matches_pattern(value, &INT_REGEX) {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                "expected an optional '-' followed by decimal digits",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_int8(&self, value: &str) -> Result<(), ValidationError> {
        self.parse_signed::<i8>(value).map(|_| ())
    }

    pub(crate) fn check_int16(&self, value: &str) -> Result<(), ValidationError> {
        self.parse_signed::<i16>(value).map(|_| ())
    }

    fn parse_signed<T: FromStr>(&self, value: &str) -> Result<T, ValidationError> {
        self.check_int(value)?;
        value.parse::<T>().map_err(|_| {
            ValidationError::invalid_format(
                *self,
                value,
                format!("value is out of range for {}", self),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-543", true)]
    #[case("0", true)]
    #[case("-0", true)]
    #[case("0012", true)]
    #[case("-", false)]
    #[case("", false)]
    #[case("+5", false)]
    #[case("-543a", false)]
    #[case("--1", false)]
    fn int_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(TypeTag::Int.check(value).is_ok(), expected);
    }

    #[rstest]
    #[case("-128", true)]
    #[case("127", true)]
    #[case("-42", true)]
    #[case("-0", true)]
    #[case("0", true)]
    #[case("-129", false)]
    #[case("128", false)]
    #[case("200", false)]
    #[case("-1280", false)]
    #[case("+1", false)]
    #[case("1.5", false)]
    fn int8_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(TypeTag::Int8.check(value).is_ok(), expected);
    }

    #[rstest]
    #[case("-32768", true)]
    #[case("32767", true)]
    #[case("12345", true)]
    #[case("-32769", false)]
    #[case("32768", false)]
    #[case("99999", false)]
    #[case("-", false)]
    fn int16_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(TypeTag::Int16.check(value).is_ok(), expected);
    }

    #[test]
    fn test_int16_out_of_range_message() {
        let result = TypeTag::Int16.check("32768");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid int16 literal '32768': value is out of range for int16"
        );
    }
}
