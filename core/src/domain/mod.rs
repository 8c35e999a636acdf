pub mod common;
pub mod health;
pub mod recipe_analysis;
