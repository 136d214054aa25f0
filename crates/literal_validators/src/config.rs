use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Controls which big-number literals [`crate::TypeTag::LargeInteger`] accepts.
///
/// The defaults accept decimal and `0x` hexadecimal literals, either optionally negative,
/// with no width bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LargeIntegerPolicy {
    /// Accept a leading `-`.
    pub allow_negative: bool,
    /// Accept a `0x` or `0X` prefixed hexadecimal body.
    pub allow_hex: bool,
    /// Bound the value to this bit width. The range is signed when `allow_negative` is set,
    /// unsigned otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bits: Option<u32>,
}

impl Default for LargeIntegerPolicy {
    fn default() -> Self {
        Self {
            allow_negative: true,
            allow_hex: true,
            max_bits: None,
        }
    }
}

impl LargeIntegerPolicy {
    /// Non-negative values that fit in `bits` bits, e.g. `uint256`.
    pub fn unsigned(bits: u32) -> Self {
        Self {
            allow_negative: false,
            allow_hex: true,
            max_bits: Some(bits),
        }
    }

    /// Two's complement values that fit in `bits` bits, e.g. `int256`.
    pub fn signed(bits: u32) -> Self {
        Self {
            allow_negative: true,
            allow_hex: true,
            max_bits: Some(bits),
        }
    }
}

/// Configuration for a [`crate::Validator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    pub large_integer: LargeIntegerPolicy,
}

impl ValidatorConfig {
    /// Reads a config from its JSON representation. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            message: format!("Failed to parse validator config: {}", e),
        })
    }

    pub fn to_json(&self) -> Result<String, ValidationError> {
        serde_json::to_string(self).map_err(|e| ValidationError::InvalidConfig {
            message: format!("Failed to serialize validator config: {}", e),
        })
    }
}
