/// Aggregate of the adapters the domain services run against.
///
/// Each port gets its own type parameter so tests can swap any single adapter
/// for a mock.
#[derive(Clone)]
pub struct Service<RA, LLM, HC> {
    pub(crate) recipe_analysis_repository: RA,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
}

impl<RA, LLM, HC> Service<RA, LLM, HC> {
    pub fn new(
        recipe_analysis_repository: RA,
        llm_client: LLM,
        health_check_repository: HC,
    ) -> Self {
        Self {
            recipe_analysis_repository,
            llm_client,
            health_check_repository,
        }
    }
}
