pub mod analyze_recipes;
pub mod get_recipe_history;
