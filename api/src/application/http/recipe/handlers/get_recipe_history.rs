use axum::extract::{Query, State};
use recipe_analyzer_core::domain::recipe_analysis::{
    GetRecipeHistoryInput, RecipeAnalysisService, RecipeHistoryEntry,
};

use crate::application::http::{
    recipe::validators::RecipeHistoryQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/recipe-history",
    tag = "recipes",
    summary = "Recipe history",
    description = "Returns the most recent analyses, newest first, with the recipes that were generated for them.",
    params(RecipeHistoryQuery),
    responses(
        (status = 200, body = Vec<RecipeHistoryEntry>),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn get_recipe_history(
    Query(query): Query<RecipeHistoryQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<RecipeHistoryEntry>>, ApiError> {
    let history = state
        .service
        .get_recipe_history(GetRecipeHistoryInput { limit: query.limit })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(history))
}
