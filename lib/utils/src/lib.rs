pub mod constants;
pub mod errors;
