use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRecipesValidator {
    #[validate(length(
        min = 1,
        max = 20,
        message = "ingredients must contain between 1 and 20 items"
    ))]
    #[schema(example = json!(["chicken breast", "rice", "broccoli"]))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeHistoryQuery {
    /// Number of analyses to return, 1 to 50. Defaults to 10.
    pub limit: Option<u64>,
}
