/// System message sent alongside every recipe prompt.
pub const SYSTEM_PERSONA: &str =
    "You are a professional chef and nutritionist. Generate recipes in valid JSON format only.";

/// Builds the user prompt for the generation service.
///
/// The output is fully determined by `ingredients`: they are listed verbatim,
/// followed by the exact JSON shape expected back and the domain constraints.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    let ingredients_str = ingredients.join(", ");

    format!(
        r#"
You are a professional chef and nutritionist. Generate 2-3 creative and delicious recipes using these ingredients: {ingredients_str}

REQUIREMENTS:
- Use as many provided ingredients as possible
- Add reasonable common ingredients if needed
- Create practical, home-cookable recipes
- Include accurate nutritional estimates
- Provide clear step-by-step instructions
- Estimate realistic cooking times and difficulty levels

RESPONSE FORMAT: Return ONLY valid JSON, no other text:

{{
    "recipes": [
        {{
            "id": "recipe_1",
            "name": "Recipe Name",
            "ingredients": ["main ingredient", "additional ingredient", "seasoning"],
            "instructions": [
                "Step 1: Preparation details",
                "Step 2: Cooking process",
                "Step 3: Final assembly"
            ],
            "cookingTime": "25 minutes",
            "difficulty": "Easy",
            "nutrition": {{
                "calories": 350,
                "protein": "18g",
                "carbs": "45g",
                "fat": "12g",
                "fiber": "6g"
            }},
            "servings": 4
        }}
    ]
}}

DIFFICULTY LEVELS: Easy (basic cooking), Medium (some skill required), Hard (advanced techniques)
COOKING TIME: Include prep + cook time (e.g., "30 minutes", "1 hour 15 minutes")
NUTRITION: Realistic estimates per serving

Generate recipes now using: {ingredients_str}
"#
    )
}
