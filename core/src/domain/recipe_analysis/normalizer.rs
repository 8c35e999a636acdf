use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::common::generate_random_hex;

use super::entities::{DEFAULT_SERVINGS, NutritionalInfo, Recipe, RecipeValidationError};

pub const UNNAMED_RECIPE: &str = "Unnamed Recipe";
pub const DEFAULT_DIFFICULTY: &str = "Medium";
pub const DEFAULT_PREP_TIME_MINUTES: u64 = 30;

/// Coerces one decoded recipe entry into a validated [`Recipe`].
///
/// `index` is the entry's position in the decoded list and only feeds the
/// synthesized id. Entries that cannot be coerced are logged and dropped so
/// their siblings still get through.
pub fn normalize_recipe(candidate: &Value, index: usize) -> Option<Recipe> {
    match try_normalize_recipe(candidate, index) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            warn!(index, error = %e, entry = %candidate, "dropping unusable recipe entry");
            None
        }
    }
}

pub fn try_normalize_recipe(
    candidate: &Value,
    index: usize,
) -> Result<Recipe, RecipeValidationError> {
    let fields = candidate
        .as_object()
        .ok_or(RecipeValidationError::NotAnObject)?;

    let id = match present(fields, "id") {
        Some(value) => scalar_string(value).ok_or(RecipeValidationError::InvalidField("id"))?,
        None => format!("recipe_{}_{}", index + 1, generate_random_hex(4)),
    };

    let name = match present(fields, "name").or_else(|| present(fields, "title")) {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or(RecipeValidationError::InvalidField("name"))?,
        None => UNNAMED_RECIPE.to_string(),
    };

    let empty = Map::new();
    let nutrition_fields = match present(fields, "nutrition")
        .or_else(|| present(fields, "nutritionalInfo"))
    {
        Some(value) => value
            .as_object()
            .ok_or(RecipeValidationError::InvalidField("nutrition"))?,
        None => &empty,
    };
    let nutrition = nutrition_from_fields(nutrition_fields)?;

    let prep_time = match present(fields, "prepTime") {
        Some(value) => {
            Some(whole_number(value).ok_or(RecipeValidationError::InvalidField("prepTime"))?)
        }
        None => None,
    };

    let cooking_time = match present(fields, "cookingTime") {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or(RecipeValidationError::InvalidField("cookingTime"))?,
        None => format!(
            "{} minutes",
            prep_time
                .map(u64::from)
                .unwrap_or(DEFAULT_PREP_TIME_MINUTES)
        ),
    };

    let difficulty = match present(fields, "difficulty") {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or(RecipeValidationError::InvalidField("difficulty"))?,
        None => DEFAULT_DIFFICULTY.to_string(),
    };

    let servings = match present(fields, "servings") {
        Some(value) => {
            whole_number(value).ok_or(RecipeValidationError::InvalidField("servings"))?
        }
        None => DEFAULT_SERVINGS,
    };

    let recipe = Recipe {
        id,
        name,
        ingredients: string_list(fields, "ingredients")?,
        instructions: string_list(fields, "instructions")?,
        cooking_time,
        difficulty,
        nutrition,
        prep_time,
        servings,
    };
    recipe.validate()?;

    Ok(recipe)
}

/// A key counts as present only when it holds a non-null value.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative whole number given as an integer, a whole float or a numeric
/// string such as `"350"`.
fn whole_number(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;

    u32::try_from(number).ok()
}

fn string_list(
    fields: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<String>, RecipeValidationError> {
    let items = present(fields, key)
        .ok_or(RecipeValidationError::MissingField(key))?
        .as_array()
        .ok_or(RecipeValidationError::InvalidField(key))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(RecipeValidationError::InvalidField(key))
        })
        .collect()
}

fn nutrition_from_fields(
    fields: &Map<String, Value>,
) -> Result<NutritionalInfo, RecipeValidationError> {
    let calories = present(fields, "calories")
        .ok_or(RecipeValidationError::MissingField("calories"))?;
    let calories =
        whole_number(calories).ok_or(RecipeValidationError::InvalidField("calories"))?;

    let amount = |key: &'static str| -> Result<Option<String>, RecipeValidationError> {
        match present(fields, key) {
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or(RecipeValidationError::InvalidField(key)),
            None => Ok(None),
        }
    };

    let nutrition = NutritionalInfo {
        calories,
        protein: amount("protein")?.ok_or(RecipeValidationError::MissingField("protein"))?,
        carbs: amount("carbs")?.ok_or(RecipeValidationError::MissingField("carbs"))?,
        fat: amount("fat")?,
        fiber: amount("fiber")?,
    };
    nutrition.validate()?;

    Ok(nutrition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use serde_json::json;

    #[test]
    fn fills_defaults_for_minimal_entry() {
        let candidate = json!({
            "ingredients": ["a"],
            "instructions": ["b"],
            "nutrition": { "calories": 100, "protein": "5g", "carbs": "10g" }
        });

        let recipe = normalize_recipe(&candidate, 0).unwrap();

        let id_pattern = Regex::new(r"^recipe_1_[0-9a-f]{8}$").unwrap();
        assert!(id_pattern.is_match(&recipe.id), "unexpected id {}", recipe.id);
        assert_eq!(recipe.name, "Unnamed Recipe");
        assert_eq!(recipe.difficulty, "Medium");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.cooking_time, "30 minutes");
        assert_eq!(recipe.nutrition.fat, None);
    }

    #[test]
    fn synthesized_id_uses_position() {
        let candidate = json!({
            "ingredients": ["a"],
            "instructions": ["b"],
            "nutrition": { "calories": 100, "protein": "5g", "carbs": "10g" }
        });

        let recipe = normalize_recipe(&candidate, 2).unwrap();
        assert!(recipe.id.starts_with("recipe_3_"));
    }

    #[test]
    fn keeps_current_field_names() {
        let candidate = json!({
            "id": "recipe_a",
            "name": "Garlic Rice",
            "title": "Ignored Title",
            "ingredients": ["rice", "garlic"],
            "instructions": ["Cook rice", "Fry garlic"],
            "cookingTime": "1 hour",
            "difficulty": "Hard",
            "nutrition": { "calories": 420, "protein": "9g", "carbs": "80g", "fat": "7g", "fiber": "2g" },
            "servings": 2
        });

        let recipe = normalize_recipe(&candidate, 0).unwrap();
        assert_eq!(recipe.id, "recipe_a");
        assert_eq!(recipe.name, "Garlic Rice");
        assert_eq!(recipe.cooking_time, "1 hour");
        assert_eq!(recipe.difficulty, "Hard");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.nutrition.fiber.as_deref(), Some("2g"));
    }

    #[test]
    fn falls_back_to_legacy_field_names() {
        let candidate = json!({
            "title": "Old Style Stew",
            "ingredients": ["beef"],
            "instructions": ["Stew it"],
            "prepTime": 45,
            "nutritionalInfo": { "calories": 500, "protein": "30g", "carbs": "20g" }
        });

        let recipe = normalize_recipe(&candidate, 0).unwrap();
        assert_eq!(recipe.name, "Old Style Stew");
        assert_eq!(recipe.cooking_time, "45 minutes");
        assert_eq!(recipe.prep_time, Some(45));
        assert_eq!(recipe.nutrition.calories, 500);
    }

    #[test]
    fn missing_ingredients_is_rejected() {
        let candidate = json!({
            "name": "Air",
            "instructions": ["Breathe"],
            "nutrition": { "calories": 0, "protein": "0g", "carbs": "0g" }
        });

        assert_eq!(
            try_normalize_recipe(&candidate, 0),
            Err(RecipeValidationError::MissingField("ingredients"))
        );
        assert!(normalize_recipe(&candidate, 0).is_none());
    }

    #[test]
    fn missing_nutrition_is_rejected() {
        let candidate = json!({
            "name": "Toast",
            "ingredients": ["bread"],
            "instructions": ["Toast it"]
        });

        assert_eq!(
            try_normalize_recipe(&candidate, 0),
            Err(RecipeValidationError::MissingField("calories"))
        );
    }

    #[test]
    fn negative_calories_are_rejected() {
        let candidate = json!({
            "ingredients": ["a"],
            "instructions": ["b"],
            "nutrition": { "calories": -5, "protein": "5g", "carbs": "10g" }
        });

        assert_eq!(
            try_normalize_recipe(&candidate, 0),
            Err(RecipeValidationError::InvalidField("calories"))
        );
    }

    #[test]
    fn whole_float_calories_are_accepted() {
        let candidate = json!({
            "ingredients": ["a"],
            "instructions": ["b"],
            "nutrition": { "calories": 250.0, "protein": "5g", "carbs": "10g" }
        });

        assert_eq!(normalize_recipe(&candidate, 0).unwrap().nutrition.calories, 250);
    }

    #[test]
    fn non_object_entry_is_rejected() {
        assert_eq!(
            try_normalize_recipe(&json!("just a string"), 0),
            Err(RecipeValidationError::NotAnObject)
        );
    }

    #[test]
    fn null_fields_count_as_absent() {
        let candidate = json!({
            "name": null,
            "difficulty": null,
            "ingredients": ["a"],
            "instructions": ["b"],
            "nutrition": { "calories": 1, "protein": "1g", "carbs": "1g", "fat": null }
        });

        let recipe = normalize_recipe(&candidate, 0).unwrap();
        assert_eq!(recipe.name, UNNAMED_RECIPE);
        assert_eq!(recipe.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(recipe.nutrition.fat, None);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let candidate = json!({
            "ingredients": ["a"],
            "instructions": ["b"],
            "prepTime": "45",
            "servings": " 3 ",
            "nutrition": { "calories": "350", "protein": "5g", "carbs": "10g" }
        });

        let recipe = try_normalize_recipe(&candidate, 0).unwrap();
        assert_eq!(recipe.nutrition.calories, 350);
        assert_eq!(recipe.prep_time, Some(45));
        assert_eq!(recipe.servings, 3);
        assert_eq!(recipe.cooking_time, "45 minutes");
    }

    #[test]
    fn non_numeric_strings_are_still_rejected() {
        let entry = |field: &'static str, value: Value| {
            let mut candidate = json!({
                "ingredients": ["a"],
                "instructions": ["b"],
                "nutrition": { "calories": 100, "protein": "5g", "carbs": "10g" }
            });
            if field == "calories" {
                candidate["nutrition"][field] = value;
            } else {
                candidate[field] = value;
            }
            candidate
        };

        for (field, value) in [
            ("calories", json!("lots")),
            ("calories", json!("-5")),
            ("prepTime", json!("half an hour")),
            ("servings", json!("2.5")),
        ] {
            assert_eq!(
                try_normalize_recipe(&entry(field, value), 0),
                Err(RecipeValidationError::InvalidField(field))
            );
        }
    }
}
