use super::{
    entities::{MAX_RECIPE_NAME_CHARS, NutritionalInfo, Recipe},
    value_objects::IngredientList,
};

const STAPLES: [&str; 3] = ["salt", "pepper", "cooking oil"];

/// Builds the single recipe returned when generation is unusable.
///
/// Pure and total: the same ingredient list always yields the same recipe.
pub fn fallback_recipe(ingredients: &IngredientList) -> Recipe {
    let first = ingredients.first();
    let subject: String = title_case(first)
        .chars()
        .take(MAX_RECIPE_NAME_CHARS - "Simple  Recipe".len())
        .collect();
    let name = format!("Simple {subject} Recipe");

    let mut recipe_ingredients = ingredients.as_slice().to_vec();
    recipe_ingredients.extend(STAPLES.iter().map(|s| s.to_string()));

    let leading = ingredients
        .as_slice()
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Recipe {
        id: format!("fallback_{}", slug(first)),
        name,
        ingredients: recipe_ingredients,
        instructions: vec![
            format!("Prepare all ingredients: {leading}"),
            "Heat oil in a pan over medium heat".to_string(),
            "Add the main ingredients and cook until tender (5-10 minutes)".to_string(),
            "Season with salt and pepper to taste".to_string(),
            "Serve hot and enjoy your homemade dish!".to_string(),
        ],
        cooking_time: "20 minutes".to_string(),
        difficulty: "Easy".to_string(),
        nutrition: NutritionalInfo {
            calories: 250,
            protein: "15g".to_string(),
            carbs: "20g".to_string(),
            fat: Some("12g".to_string()),
            fiber: Some("5g".to_string()),
        },
        prep_time: Some(20),
        servings: 2,
    }
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

fn slug(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }

    out.trim_end_matches('-').to_string()
}
