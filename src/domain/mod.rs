pub mod errors;
pub mod identifier;
