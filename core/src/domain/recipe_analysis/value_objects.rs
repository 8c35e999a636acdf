use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_INGREDIENTS: usize = 20;
pub const MAX_RECIPES: usize = 3;
pub const DEFAULT_HISTORY_LIMIT: u64 = 10;
pub const MAX_HISTORY_LIMIT: u64 = 50;

#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipeHistoryInput {
    pub limit: Option<u64>,
}

impl GetRecipeHistoryInput {
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT)
    }
}

/// Ingredient list that passed caller validation: 1 to 20 trimmed,
/// non-empty entries in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn parse(raw: Vec<String>) -> Result<Self, CoreError> {
        let cleaned: Vec<String> = raw
            .into_iter()
            .map(|ingredient| ingredient.trim().to_string())
            .filter(|ingredient| !ingredient.is_empty())
            .collect();

        if cleaned.is_empty() {
            return Err(CoreError::InvalidIngredients(
                "At least one non-empty ingredient is required".to_string(),
            ));
        }
        if cleaned.len() > MAX_INGREDIENTS {
            return Err(CoreError::InvalidIngredients(format!(
                "Maximum {MAX_INGREDIENTS} ingredients allowed"
            )));
        }

        Ok(Self(cleaned))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Never empty after [`IngredientList::parse`].
    pub fn first(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
