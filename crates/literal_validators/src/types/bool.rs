use crate::{TypeTag, ValidationError, constants::BOOL_REGEX, utils::matches_pattern};

impl TypeTag {
    pub(crate) fn check_bool(&self, value: &str) -> Result<(), ValidationError> {
        if !matches_pattern(value, &BOOL_REGEX) {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                "expected 'true' or 'false'",
            ));
        }
        Ok(())
    }
}
