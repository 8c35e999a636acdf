use crate::{
    domain::common::{RecipeAnalyzerConfig, services::Service},
    infrastructure::{
        db::{Db, DbConfig},
        health::SeaOrmHealthCheckRepository,
        llm::OpenRouterLLMClient,
        recipe_analysis::repositories::SeaOrmRecipeAnalysisRepository,
    },
};

pub type RecipeAnalyzerService =
    Service<SeaOrmRecipeAnalysisRepository, OpenRouterLLMClient, SeaOrmHealthCheckRepository>;

pub async fn create_service(
    config: RecipeAnalyzerConfig,
) -> Result<RecipeAnalyzerService, anyhow::Error> {
    let database = Db::new(DbConfig {
        database_url: config.database.url.clone(),
    })
    .await?;
    database.ensure_schema().await?;

    let recipe_analysis_repository = SeaOrmRecipeAnalysisRepository::new(database.get_db());
    let health_check_repository = SeaOrmHealthCheckRepository::new(database.get_db());
    let llm_client = OpenRouterLLMClient::new(config.llm)?;

    Ok(Service::new(
        recipe_analysis_repository,
        llm_client,
        health_check_repository,
    ))
}
