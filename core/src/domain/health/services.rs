use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
    recipe_analysis::ports::{LLMClient, RecipeAnalysisRepository},
};

impl<RA, LLM, HC> HealthCheckService for Service<RA, LLM, HC>
where
    RA: RecipeAnalysisRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
