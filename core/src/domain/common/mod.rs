use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeAnalyzerConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://openrouter.ai/api/v1".to_string(),
            model: "anthropic/claude-3-haiku".to_string(),
            timeout_secs: 30,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Random lowercase hex string of `2 * bytes` characters.
pub fn generate_random_hex(bytes: usize) -> String {
    let raw: Vec<u8> = (0..bytes).map(|_| rand::random::<u8>()).collect();
    hex::encode(raw)
}
