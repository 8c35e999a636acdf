use chrono::{DateTime, FixedOffset};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::{
    domain::{
        common::generate_uuid_v7,
        recipe_analysis::entities::{DEFAULT_SERVINGS, NutritionalInfo, Recipe, RecipeAnalysis},
    },
    entity::{generated_recipes, recipe_analyses},
};

impl From<&recipe_analyses::Model> for RecipeAnalysis {
    fn from(model: &recipe_analyses::Model) -> Self {
        let ingredients: Vec<String> =
            serde_json::from_value(model.ingredients.clone()).unwrap_or_default();

        Self {
            id: model.id,
            ingredients,
            message: model.message.clone(),
            used_fallback: model.used_fallback,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<&generated_recipes::Model> for Recipe {
    fn from(model: &generated_recipes::Model) -> Self {
        Self {
            id: model.recipe_id.clone(),
            name: model.name.clone(),
            ingredients: serde_json::from_value(model.ingredients.clone()).unwrap_or_default(),
            instructions: serde_json::from_value(model.instructions.clone()).unwrap_or_default(),
            cooking_time: model.cooking_time.clone(),
            difficulty: model.difficulty.clone(),
            nutrition: NutritionalInfo {
                calories: u32::try_from(model.calories).unwrap_or_default(),
                protein: model.protein.clone(),
                carbs: model.carbs.clone(),
                fat: model.fat.clone(),
                fiber: model.fiber.clone(),
            },
            prep_time: model.prep_time.and_then(|minutes| u32::try_from(minutes).ok()),
            servings: u32::try_from(model.servings).unwrap_or(DEFAULT_SERVINGS),
        }
    }
}

pub fn analysis_active_model(analysis: &RecipeAnalysis) -> recipe_analyses::ActiveModel {
    recipe_analyses::ActiveModel {
        id: Set(analysis.id),
        ingredients: Set(serde_json::json!(analysis.ingredients)),
        message: Set(analysis.message.clone()),
        used_fallback: Set(analysis.used_fallback),
        created_at: Set(analysis.created_at.fixed_offset()),
    }
}

pub fn recipe_active_model(
    analysis_id: Uuid,
    position: usize,
    recipe: &Recipe,
    created_at: DateTime<FixedOffset>,
) -> generated_recipes::ActiveModel {
    generated_recipes::ActiveModel {
        id: Set(generate_uuid_v7()),
        analysis_id: Set(analysis_id),
        position: Set(i32::try_from(position).unwrap_or(i32::MAX)),
        recipe_id: Set(recipe.id.clone()),
        name: Set(recipe.name.clone()),
        ingredients: Set(serde_json::json!(recipe.ingredients)),
        instructions: Set(serde_json::json!(recipe.instructions)),
        cooking_time: Set(recipe.cooking_time.clone()),
        difficulty: Set(recipe.difficulty.clone()),
        prep_time: Set(recipe
            .prep_time
            .map(|minutes| i32::try_from(minutes).unwrap_or(i32::MAX))),
        servings: Set(i32::try_from(recipe.servings).unwrap_or(i32::MAX)),
        calories: Set(i32::try_from(recipe.nutrition.calories).unwrap_or(i32::MAX)),
        protein: Set(recipe.nutrition.protein.clone()),
        carbs: Set(recipe.nutrition.carbs.clone()),
        fat: Set(recipe.nutrition.fat.clone()),
        fiber: Set(recipe.nutrition.fiber.clone()),
        created_at: Set(created_at),
    }
}
