use axum::extract::State;
use recipe_analyzer_core::domain::recipe_analysis::{
    AnalyzeIngredientsInput, RecipeAnalysisResponse, RecipeAnalysisService,
};

use crate::application::http::{
    recipe::validators::AnalyzeRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-recipes",
    tag = "recipes",
    summary = "Analyze ingredients",
    description = "Generates up to three recipes from the given ingredients. When generation is unavailable a single fallback recipe is returned instead.",
    request_body = AnalyzeRecipesValidator,
    responses(
        (status = 200, body = RecipeAnalysisResponse),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn analyze_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeRecipesValidator>,
) -> Result<Response<RecipeAnalysisResponse>, ApiError> {
    let response = state
        .service
        .analyze_ingredients(AnalyzeIngredientsInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(response))
}
