use serde_json::Value;
use tracing::{debug, info, warn};

use super::{
    entities::{GenerationError, Recipe},
    extractor::extract_json_object,
    fallback::fallback_recipe,
    normalizer::normalize_recipe,
    ports::LLMClient,
    prompt::build_recipe_prompt,
    value_objects::{IngredientList, MAX_RECIPES},
};

pub const FALLBACK_MESSAGE: &str = "Using fallback recipes due to service unavailability. \
     Please try again later for AI-generated suggestions.";

/// Where the recipes of a [`GenerationOutcome`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    Generated,
    Fallback(GenerationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub recipes: Vec<Recipe>,
    pub source: RecipeSource,
}

impl GenerationOutcome {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, RecipeSource::Fallback(_))
    }

    pub fn message(&self) -> String {
        match self.source {
            RecipeSource::Generated => format!(
                "Generated {} recipes from your ingredients!",
                self.recipes.len()
            ),
            RecipeSource::Fallback(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Runs the full pipeline for one request.
///
/// Never fails: every [`GenerationError`] is absorbed into a single
/// deterministic fallback recipe. Generated results keep the order of the
/// decoded list and are capped at [`MAX_RECIPES`].
pub async fn generate_recipes<L: LLMClient>(
    llm_client: &L,
    ingredients: &IngredientList,
) -> GenerationOutcome {
    match try_generate_recipes(llm_client, ingredients).await {
        Ok(recipes) => {
            info!(count = recipes.len(), "generated recipes");
            GenerationOutcome {
                recipes,
                source: RecipeSource::Generated,
            }
        }
        Err(e) => {
            warn!(error = %e, "recipe generation failed, using fallback");
            GenerationOutcome {
                recipes: vec![fallback_recipe(ingredients)],
                source: RecipeSource::Fallback(e),
            }
        }
    }
}

async fn try_generate_recipes<L: LLMClient>(
    llm_client: &L,
    ingredients: &IngredientList,
) -> Result<Vec<Recipe>, GenerationError> {
    let prompt = build_recipe_prompt(ingredients.as_slice());

    let raw = llm_client.generate(prompt).await?;
    debug!(length = raw.len(), "received generation output");

    let decoded = extract_json_object(&raw).inspect_err(|e| {
        if let GenerationError::Decode { snippet, .. } = e {
            warn!(%snippet, "could not decode generation output");
        }
    })?;

    let candidates = decoded
        .get("recipes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut recipes: Vec<Recipe> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| normalize_recipe(candidate, index))
        .collect();

    if recipes.is_empty() {
        return Err(GenerationError::NoUsableRecipes);
    }

    if recipes.len() > MAX_RECIPES {
        debug!(
            discarded = recipes.len() - MAX_RECIPES,
            "truncating generated recipes"
        );
        recipes.truncate(MAX_RECIPES);
    }

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::recipe_analysis::entities::RemoteFailure;

    /// Replays scripted responses and records the prompts it was sent.
    struct ScriptedClient {
        responses: Mutex<VecDeque<Result<String, RemoteFailure>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(response: Result<String, RemoteFailure>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([response])),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn replying(body: Value) -> Self {
            Self::new(Ok(body.to_string()))
        }
    }

    impl LLMClient for ScriptedClient {
        async fn generate(&self, prompt: String) -> Result<String, RemoteFailure> {
            self.prompts.lock().unwrap().push(prompt);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(RemoteFailure::NotConfigured))
        }
    }

    fn ingredients() -> IngredientList {
        IngredientList::parse(vec!["tomato".to_string(), "basil".to_string()]).unwrap()
    }

    fn valid_entry(name: &str) -> Value {
        json!({
            "id": name.to_lowercase().replace(' ', "_"),
            "name": name,
            "ingredients": ["tomato", "basil"],
            "instructions": ["Chop", "Mix"],
            "cookingTime": "10 minutes",
            "difficulty": "Easy",
            "nutrition": { "calories": 120, "protein": "3g", "carbs": "15g" },
            "servings": 2
        })
    }

    fn assert_fallback(outcome: &GenerationOutcome) {
        assert!(outcome.used_fallback());
        assert_eq!(outcome.recipes, vec![fallback_recipe(&ingredients())]);
        assert_eq!(outcome.message(), FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn sends_prompt_built_from_ingredients() {
        let client = ScriptedClient::replying(json!({ "recipes": [valid_entry("Salad")] }));

        generate_recipes(&client, &ingredients()).await;

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), &[build_recipe_prompt(ingredients().as_slice())]);
    }

    #[tokio::test]
    async fn returns_generated_recipes_in_order() {
        let client = ScriptedClient::replying(json!({
            "recipes": [valid_entry("First"), valid_entry("Second")]
        }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_eq!(outcome.source, RecipeSource::Generated);
        let names: Vec<_> = outcome.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(outcome.message(), "Generated 2 recipes from your ingredients!");
    }

    #[tokio::test]
    async fn caps_at_three_recipes() {
        let entries: Vec<Value> = ["A", "B", "C", "D", "E"].map(valid_entry).into();
        let client = ScriptedClient::replying(json!({ "recipes": entries }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        let names: Vec<_> = outcome.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn recovers_object_wrapped_in_prose() {
        let raw = format!(
            "noise {} trailing",
            json!({ "recipes": [valid_entry("Bruschetta")] })
        );
        let client = ScriptedClient::new(Ok(raw));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_eq!(outcome.source, RecipeSource::Generated);
        assert_eq!(outcome.recipes[0].name, "Bruschetta");
    }

    #[tokio::test]
    async fn skips_invalid_entries_and_keeps_siblings() {
        let client = ScriptedClient::replying(json!({
            "recipes": [
                { "name": "Broken" },
                valid_entry("Good"),
                { "name": "Also Broken", "ingredients": [], "instructions": ["x"] }
            ]
        }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_eq!(outcome.source, RecipeSource::Generated);
        assert_eq!(outcome.recipes.len(), 1);
        assert_eq!(outcome.recipes[0].name, "Good");
    }

    #[tokio::test]
    async fn remote_failure_uses_fallback() {
        for failure in [
            RemoteFailure::Timeout,
            RemoteFailure::Transport("connection reset".to_string()),
            RemoteFailure::Status {
                status: 503,
                body: "unavailable".to_string(),
            },
            RemoteFailure::MalformedEnvelope("no choices".to_string()),
        ] {
            let client = ScriptedClient::new(Err(failure.clone()));

            let outcome = generate_recipes(&client, &ingredients()).await;

            assert_fallback(&outcome);
            assert_eq!(
                outcome.source,
                RecipeSource::Fallback(GenerationError::RemoteUnavailable(failure))
            );
        }
    }

    #[tokio::test]
    async fn undecodable_output_uses_fallback() {
        let client = ScriptedClient::new(Ok("I'd rather not.".to_string()));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_fallback(&outcome);
        assert!(matches!(
            outcome.source,
            RecipeSource::Fallback(GenerationError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn empty_recipe_list_uses_fallback() {
        let client = ScriptedClient::replying(json!({ "recipes": [] }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_fallback(&outcome);
        assert_eq!(
            outcome.source,
            RecipeSource::Fallback(GenerationError::NoUsableRecipes)
        );
    }

    #[tokio::test]
    async fn all_invalid_entries_use_fallback() {
        let client = ScriptedClient::replying(json!({
            "recipes": [{ "name": "Nope" }, 42]
        }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_fallback(&outcome);
    }

    #[tokio::test]
    async fn missing_recipes_key_uses_fallback() {
        let client = ScriptedClient::replying(json!({ "dishes": [valid_entry("Elsewhere")] }));

        let outcome = generate_recipes(&client, &ingredients()).await;

        assert_fallback(&outcome);
    }
}
