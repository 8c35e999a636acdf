use super::handlers::analyze_recipes::{__path_analyze_recipes, analyze_recipes};
use super::handlers::get_recipe_history::{__path_get_recipe_history, get_recipe_history};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_recipes, get_recipe_history))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze-recipes", state.args.server.root_path),
            post(analyze_recipes),
        )
        .route(
            &format!("{}/recipe-history", state.args.server.root_path),
            get(get_recipe_history),
        )
}
