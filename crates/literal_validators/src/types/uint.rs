use std::str::FromStr;

use crate::{TypeTag, ValidationError, constants::UINT_REGEX, utils::matches_pattern};

impl TypeTag {
    pub(crate) fn check_uint(&self, value: &str) -> Result<(), ValidationError> {
        if !matches_pattern(value, &UINT_REGEX) {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                "expected one or more decimal digits",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_uint8(&self, value: &str) -> Result<(), ValidationError> {
        self.parse_unsigned::<u8>(value).map(|_| ())
    }

    /// Unlike `uint8`, only the canonical rendering is accepted, so `042` is rejected.
    pub(crate) fn check_uint16(&self, value: &str) -> Result<(), ValidationError> {
        let parsed = self.parse_unsigned::<u16>(value)?;
        if parsed.to_string() != value {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                format!("expected canonical form {}", parsed),
            ));
        }
        Ok(())
    }

    // The shape check runs first since `FromStr` for integers accepts a leading '+'.
    fn parse_unsigned<T: FromStr>(&self, value: &str) -> Result<T, ValidationError> {
        self.check_uint(value)?;
        value.parse::<T>().map_err(|_| {
            ValidationError::invalid_format(
                *self,
                value,
                format!("value is out of range for {}", self),
            )
        })
    }
}
