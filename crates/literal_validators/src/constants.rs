use regex::Regex;
use std::sync::LazyLock;

pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_HEX_LENGTH: usize = 40;
pub const ADDRESS_LENGTH: usize = ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH;

pub const DECIMAL_RADIX: u32 = 10;
pub const HEX_RADIX: u32 = 16;

// Regex patterns for literal shapes
pub static UINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid uint regex"));

pub static INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("Invalid int regex"));

pub static BOOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(true|false)$").expect("Invalid bool regex"));

pub static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("Invalid address regex"));

/// Captures an optional sign (1), then either a hex body (2) or a decimal body (3).
pub static LARGE_INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)(?:0[xX]([0-9a-fA-F]+)|([0-9]+))$").expect("Invalid large integer regex")
});
