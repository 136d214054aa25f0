use num_bigint::{BigInt, Sign};

use crate::{
    TypeTag, ValidationError,
    config::LargeIntegerPolicy,
    constants::{DECIMAL_RADIX, HEX_RADIX, LARGE_INTEGER_REGEX},
};

impl TypeTag {
    pub(crate) fn check_large_integer(
        &self,
        value: &str,
        policy: &LargeIntegerPolicy,
    ) -> Result<(), ValidationError> {
        let parsed = self.parse_large_integer(value, policy)?;

        if let Some(bits) = policy.max_bits
            && !fits_in_bits(&parsed, bits, policy.allow_negative)
        {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                format!(
                    "value does not fit in {}{}",
                    if policy.allow_negative { "int" } else { "uint" },
                    bits
                ),
            ));
        }

        Ok(())
    }

    // num-bigint alone would also accept a leading '+' and '_' separators.
    fn parse_large_integer(
        &self,
        value: &str,
        policy: &LargeIntegerPolicy,
    ) -> Result<BigInt, ValidationError> {
        let captures = LARGE_INTEGER_REGEX.captures(value).ok_or_else(|| {
            ValidationError::invalid_format(*self, value, "expected a decimal or 0x hex integer")
        })?;

        let negative = !captures[1].is_empty();
        if negative && !policy.allow_negative {
            return Err(ValidationError::invalid_format(
                *self,
                value,
                "negative values are not allowed",
            ));
        }

        let (body, radix) = match (captures.get(2), captures.get(3)) {
            (Some(hex), _) if policy.allow_hex => (hex.as_str(), HEX_RADIX),
            (Some(_), _) => {
                return Err(ValidationError::invalid_format(
                    *self,
                    value,
                    "hexadecimal values are not allowed",
                ));
            }
            (None, Some(decimal)) => (decimal.as_str(), DECIMAL_RADIX),
            (None, None) => {
                return Err(ValidationError::invalid_format(
                    *self,
                    value,
                    "expected a decimal or 0x hex integer",
                ));
            }
        };

        let magnitude = BigInt::parse_bytes(body.as_bytes(), radix).ok_or_else(|| {
            ValidationError::invalid_format(*self, value, "failed to parse as a big integer")
        })?;

        Ok(if negative { -magnitude } else { magnitude })
    }
}

/// Whether `value` lies in `[0, 2^bits)`, or in `[-2^(bits-1), 2^(bits-1))` when signed.
///
/// Only the bit length of the magnitude is inspected, so the bound is never materialised.
fn fits_in_bits(value: &BigInt, bits: u32, signed: bool) -> bool {
    let bits = u64::from(bits);
    if !signed {
        return value.sign() != Sign::Minus && value.bits() <= bits;
    }
    if bits == 0 {
        return value.sign() == Sign::NoSign;
    }
    if value.bits() < bits {
        return true;
    }
    // -2^(bits-1) is the only value whose magnitude needs the full width.
    value.sign() == Sign::Minus
        && value.bits() == bits
        && value.magnitude().trailing_zeros() == Some(bits - 1)
}
