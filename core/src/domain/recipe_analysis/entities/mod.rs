pub mod errors;
pub mod recipe;
pub mod recipe_analysis;

pub use errors::*;
pub use recipe::*;
pub use recipe_analysis::*;
