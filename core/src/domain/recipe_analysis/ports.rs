use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_analysis::{
        entities::{
            Recipe, RecipeAnalysis, RecipeAnalysisResponse, RecipeHistoryEntry, RemoteFailure,
        },
        value_objects::{AnalyzeIngredientsInput, GetRecipeHistoryInput},
    },
};

/// Repository trait for analysis history
#[cfg_attr(test, mockall::automock)]
pub trait RecipeAnalysisRepository: Send + Sync {
    /// Records the analysis and its recipes atomically: either every row is
    /// written or none is.
    fn save_analysis(
        &self,
        analysis: RecipeAnalysis,
        recipes: Vec<Recipe>,
    ) -> impl Future<Output = Result<RecipeAnalysis, CoreError>> + Send;

    /// Most recent analyses first, each with its recipes in original order.
    fn recent_analyses(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecipeHistoryEntry>, CoreError>> + Send;
}

/// LLM Client trait for the remote text-generation service
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` and returns the trimmed text of the first message.
    fn generate(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, RemoteFailure>> + Send;
}

/// Service trait for recipe analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeAnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<RecipeAnalysisResponse, CoreError>> + Send;

    fn get_recipe_history(
        &self,
        input: GetRecipeHistoryInput,
    ) -> impl Future<Output = Result<Vec<RecipeHistoryEntry>, CoreError>> + Send;
}
