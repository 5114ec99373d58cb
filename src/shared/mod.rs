pub mod symbols;
pub mod types;
