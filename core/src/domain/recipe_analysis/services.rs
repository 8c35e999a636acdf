use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    recipe_analysis::{
        entities::{RecipeAnalysis, RecipeAnalysisResponse, RecipeHistoryEntry},
        generation::generate_recipes,
        ports::{LLMClient, RecipeAnalysisRepository, RecipeAnalysisService},
        value_objects::{AnalyzeIngredientsInput, GetRecipeHistoryInput, IngredientList},
    },
};

impl<RA, LLM, HC> RecipeAnalysisService for Service<RA, LLM, HC>
where
    RA: RecipeAnalysisRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(ingredients = input.ingredients.len()))]
    async fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<RecipeAnalysisResponse, CoreError> {
        // 1. Validate ingredients
        let ingredients = IngredientList::parse(input.ingredients)?;

        // 2. Generate, falling back when generation is unusable
        let outcome = generate_recipes(&self.llm_client, &ingredients).await;
        let message = outcome.message();

        // 3. Record history. Fallback recipes are not stored.
        let analysis = RecipeAnalysis::new(
            ingredients.into_inner(),
            Some(message.clone()),
            outcome.used_fallback(),
        );
        let stored_recipes = if outcome.used_fallback() {
            Vec::new()
        } else {
            outcome.recipes.clone()
        };

        // Persistence failures never change what the caller gets back.
        if let Err(e) = self
            .recipe_analysis_repository
            .save_analysis(analysis, stored_recipes)
            .await
        {
            error!("Failed to persist recipe analysis: {}", e);
        }

        Ok(RecipeAnalysisResponse {
            recipes: outcome.recipes,
            message: Some(message),
        })
    }

    #[instrument(skip(self))]
    async fn get_recipe_history(
        &self,
        input: GetRecipeHistoryInput,
    ) -> Result<Vec<RecipeHistoryEntry>, CoreError> {
        self.recipe_analysis_repository
            .recent_analyses(input.effective_limit())
            .await
    }
}
