use clap::Parser;
use recipe_analyzer_core::domain::common::{DatabaseConfig, LLMConfig, RecipeAnalyzerConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-analyzer", version, about = "Recipe Analyzer API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Serve Prometheus metrics on `{root_path}/metrics`.
    #[arg(
        long = "server-metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://recipes.db?mode=rwc"
    )]
    pub url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(
        long = "llm-api-url",
        env = "OPENROUTER_API_URL",
        default_value = "https://openrouter.ai/api/v1"
    )]
    pub api_url: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = "anthropic/claude-3-haiku")]
    pub model: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecipeAnalyzerConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig { url: args.db.url },
            llm: LLMConfig {
                api_key: args.llm.api_key,
                api_url: args.llm.api_url,
                model: args.llm.model,
                timeout_secs: args.llm.timeout_secs,
                temperature: args.llm.temperature,
                max_tokens: args.llm.max_tokens,
            },
        }
    }
}
