pub mod recipe_analysis_repository;

pub use recipe_analysis_repository::SeaOrmRecipeAnalysisRepository;
