pub mod assemble;
pub mod ingredients;

pub use ingredients::extract_ingredients;
