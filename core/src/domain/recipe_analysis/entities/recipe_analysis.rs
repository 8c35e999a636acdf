use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

use super::recipe::{Recipe, RecipePayload};

/// One analysis request as recorded in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeAnalysis {
    pub id: Uuid,
    pub ingredients: Vec<String>,
    pub message: Option<String>,
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
}

impl RecipeAnalysis {
    pub fn new(ingredients: Vec<String>, message: Option<String>, used_fallback: bool) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            ingredients,
            message,
            used_fallback,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeAnalysisResponse {
    #[schema(value_type = Vec<RecipePayload>)]
    pub recipes: Vec<Recipe>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeHistoryEntry {
    pub id: Uuid,
    pub ingredients: Vec<String>,
    #[schema(value_type = Vec<RecipePayload>)]
    pub recipes: Vec<Recipe>,
    pub message: Option<String>,
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
}

impl RecipeHistoryEntry {
    pub fn new(analysis: RecipeAnalysis, recipes: Vec<Recipe>) -> Self {
        Self {
            id: analysis.id,
            ingredients: analysis.ingredients,
            recipes,
            message: analysis.message,
            used_fallback: analysis.used_fallback,
            created_at: analysis.created_at,
        }
    }
}
