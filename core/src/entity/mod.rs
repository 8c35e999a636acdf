//! sea-orm entities for the analysis history tables.

pub mod generated_recipes;
pub mod recipe_analyses;
