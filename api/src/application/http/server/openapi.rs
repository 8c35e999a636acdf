use crate::application::http::{health::router::HealthApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "Recipe Analyzer API"))]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every router's paths, not yet prefixed with the root path.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RecipeApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
