//! Validators for string literals of primitive on-chain types: fixed-width and unbounded
//! integers, booleans and `0x` hex addresses.
pub mod config;
pub mod constants;
pub mod error;
pub mod type_tag;
pub mod types;
pub mod utils;
pub mod validator;

pub use config::{LargeIntegerPolicy, ValidatorConfig};
pub use error::ValidationError;
pub use type_tag::TypeTag;

pub use validator::{
    Validator, validate_address, validate_bool, validate_int, validate_int8, validate_int16,
    validate_large_integer, validate_uint, validate_uint8, validate_uint16,
};
