pub mod cocktails;
pub mod errors;
