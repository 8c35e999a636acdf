use std::sync::Arc;

use recipe_analyzer_core::application::RecipeAnalyzerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<RecipeAnalyzerService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeAnalyzerService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
