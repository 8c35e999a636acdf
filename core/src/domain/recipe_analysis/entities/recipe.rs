use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::RecipeValidationError;

pub const MAX_RECIPE_NAME_CHARS: usize = 200;
pub const DEFAULT_SERVINGS: u32 = 4;

/// `<number><unit>`, optionally behind an approximation marker (`~5g`, `<1g`,
/// `about 20 g`).
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:~|≈|<|>|about|around|approx(?:\.|imately)?)\s*)?\d+(?:\.\d+)?\s*[a-zµ]+$")
        .expect("amount pattern is a valid regex")
});

/// Per-serving nutrition estimate. Amounts are strings such as `"18g"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub calories: u32,
    #[schema(example = "18g")]
    pub protein: String,
    #[schema(example = "45g")]
    pub carbs: String,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub fiber: Option<String>,
}

impl NutritionalInfo {
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        validate_amount(&self.protein)?;
        validate_amount(&self.carbs)?;
        if let Some(fat) = &self.fat {
            validate_amount(fat)?;
        }
        if let Some(fiber) = &self.fiber {
            validate_amount(fiber)?;
        }
        Ok(())
    }
}

fn validate_amount(amount: &str) -> Result<(), RecipeValidationError> {
    if AMOUNT_PATTERN.is_match(amount.trim()) {
        Ok(())
    } else {
        Err(RecipeValidationError::InvalidAmount(amount.to_string()))
    }
}

/// Canonical recipe record.
///
/// Only one naming convention lives here. The legacy mirrors (`title`,
/// `nutritionalInfo`, `prepTime`) are produced by [`RecipePayload`] when the
/// recipe crosses a serialization boundary, so the two shapes cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RecipePayload", try_from = "RecipePayload")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
    pub nutrition: NutritionalInfo,
    /// Prep time in minutes, when the source stated one explicitly.
    pub prep_time: Option<u32>,
    pub servings: u32,
}

impl Recipe {
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.id.trim().is_empty() {
            return Err(RecipeValidationError::InvalidField("id"));
        }

        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > MAX_RECIPE_NAME_CHARS {
            return Err(RecipeValidationError::InvalidName);
        }

        if self.ingredients.is_empty() {
            return Err(RecipeValidationError::EmptyList("ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(RecipeValidationError::EmptyList("instructions"));
        }
        if self.servings == 0 {
            return Err(RecipeValidationError::InvalidField("servings"));
        }
        if self.prep_time == Some(0) {
            return Err(RecipeValidationError::InvalidField("prepTime"));
        }

        self.nutrition.validate()
    }

    /// Minutes for the legacy `prepTime` field: the explicit value when known,
    /// otherwise whatever can be read out of `cooking_time`.
    pub fn legacy_prep_time(&self) -> Option<u32> {
        self.prep_time
            .or_else(|| parse_duration_minutes(&self.cooking_time))
    }
}

/// Wire shape of a recipe, carrying both the current fields and the
/// deprecated mirrors older consumers still read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Recipe)]
pub struct RecipePayload {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[schema(example = "25 minutes")]
    pub cooking_time: String,
    #[schema(example = "Easy")]
    pub difficulty: String,
    pub nutrition: NutritionalInfo,
    /// Deprecated, use `name`.
    #[serde(default)]
    pub title: Option<String>,
    /// Deprecated, use `nutrition`.
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
    /// Deprecated, minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl From<Recipe> for RecipePayload {
    fn from(recipe: Recipe) -> Self {
        let prep_time = recipe.legacy_prep_time();

        Self {
            title: Some(recipe.name.clone()),
            nutritional_info: Some(recipe.nutrition.clone()),
            prep_time,
            servings: Some(recipe.servings),
            id: recipe.id,
            name: recipe.name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty,
            nutrition: recipe.nutrition,
        }
    }
}

impl TryFrom<RecipePayload> for Recipe {
    type Error = RecipeValidationError;

    fn try_from(payload: RecipePayload) -> Result<Self, Self::Error> {
        let recipe = Recipe {
            id: payload.id,
            name: payload.name,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            cooking_time: payload.cooking_time,
            difficulty: payload.difficulty,
            nutrition: payload.nutrition,
            prep_time: payload.prep_time,
            servings: payload.servings.unwrap_or(DEFAULT_SERVINGS),
        };
        recipe.validate()?;

        Ok(recipe)
    }
}

/// Reads a free-text duration such as `"1 hour 15 minutes"` or `"25 mins"`
/// into minutes. Returns `None` when no hour/minute amount is present.
pub fn parse_duration_minutes(text: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut pending: Option<u32> = None;

    for word in text.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        let digits_end = word
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(word.len());
        let (number, unit) = word.split_at(digits_end);

        if let Ok(value) = number.parse::<u32>() {
            pending = Some(value);
        }

        if unit.is_empty() {
            continue;
        }

        if let Some(value) = pending.take() {
            if unit.starts_with('h') {
                total = total.saturating_add(value.saturating_mul(60));
            } else if unit.starts_with("min") {
                total = total.saturating_add(value);
            }
        }
    }

    (total > 0).then_some(total)
}
