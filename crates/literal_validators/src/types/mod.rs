pub mod address;
pub mod bool;
pub mod int;
pub mod large_integer;
pub mod uint;
