use snafu::Snafu;

use crate::TypeTag;

/// Represents an error that can occur while validating a literal.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ValidationError {
    /// The value does not match the grammar of the type, or is out of its range.
    #[snafu(display("Invalid {type_tag} literal '{value}': {reason}"))]
    InvalidFormat {
        type_tag: TypeTag,
        value: String,
        reason: String,
    },

    /// The type name does not name a supported type.
    #[snafu(display("Unknown type tag: {name}"))]
    UnknownTypeTag { name: String },

    /// The validator configuration could not be read.
    #[snafu(display("Invalid validator config: {message}"))]
    InvalidConfig { message: String },
}

impl ValidationError {
    pub(crate) fn invalid_format(
        type_tag: TypeTag,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidFormat {
            type_tag,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
