use crate::{TypeTag, ValidationError, config::ValidatorConfig};

/// Validates literals against a [`TypeTag`] under a fixed [`ValidatorConfig`].
///
/// A validator holds no mutable state, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Checks `value` against `type_tag`.
    ///
    /// # Arguments
    /// * `type_tag` - The type the literal must conform to.
    /// * `value` - The candidate literal.
    ///
    /// # Returns
    /// `Ok(())` if the literal is valid, or a [`ValidationError::InvalidFormat`] with the reason.
    pub fn check(&self, type_tag: TypeTag, value: &str) -> Result<(), ValidationError> {
        type_tag.check_with_policy(value, &self.config.large_integer)
    }

    /// Returns whether `value` is a valid literal of `type_tag`.
    pub fn validate(&self, type_tag: TypeTag, value: &str) -> bool {
        self.check(type_tag, value).is_ok()
    }
}

pub fn validate_uint(value: &str) -> bool {
    TypeTag::Uint.check(value).is_ok()
}

pub fn validate_uint8(value: &str) -> bool {
    TypeTag::Uint8.check(value).is_ok()
}

pub fn validate_uint16(value: &str) -> bool {
    TypeTag::Uint16.check(value).is_ok()
}

pub fn validate_int(value: &str) -> bool {
    TypeTag::Int.check(value).is_ok()
}

pub fn validate_int8(value: &str) -> bool {
    TypeTag::Int8.check(value).is_ok()
}

pub fn validate_int16(value: &str) -> bool {
    TypeTag::Int16.check(value).is_ok()
}

pub fn validate_bool(value: &str) -> bool {
    TypeTag::Bool.check(value).is_ok()
}

pub fn validate_address(value: &str) -> bool {
    TypeTag::Address.check(value).is_ok()
}

/// Uses the default [`crate::LargeIntegerPolicy`]: signed, decimal or hex, unbounded.
pub fn validate_large_integer(value: &str) -> bool {
    TypeTag::LargeInteger.check(value).is_ok()
}
