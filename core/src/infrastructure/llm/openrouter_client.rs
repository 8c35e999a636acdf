use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::LLMConfig,
    recipe_analysis::{entities::RemoteFailure, ports::LLMClient, prompt::SYSTEM_PERSONA},
};

const BODY_SNIPPET_CHARS: usize = 500;

/// Client for an OpenAI-compatible chat completions endpoint (OpenRouter by
/// default). One POST per call, bounded by the configured timeout, no retries.
#[derive(Debug, Clone)]
pub struct OpenRouterLLMClient {
    api_key: Option<String>,
    api_url: String,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenRouterLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = config.api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("No generation API key configured, requests will use fallback recipes");
        }

        Ok(Self {
            api_key,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model_name: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    async fn call_chat_completions(
        &self,
        api_key: &str,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, RemoteFailure> {
        let url = format!("{}/chat/completions", self.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Generation API request failed: {}", e);
                transport_failure(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read generation API response: {}", e);
            transport_failure(e)
        })?;

        if !status.is_success() {
            tracing::error!("Generation API error: {} - {}", status, body);
            return Err(RemoteFailure::Status {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse generation API response: {}", e);
            RemoteFailure::MalformedEnvelope(e.to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                RemoteFailure::MalformedEnvelope("missing choices[0].message.content".to_string())
            })
    }
}

fn transport_failure(e: reqwest::Error) -> RemoteFailure {
    if e.is_timeout() {
        RemoteFailure::Timeout
    } else {
        RemoteFailure::Transport(e.to_string())
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

impl LLMClient for OpenRouterLLMClient {
    async fn generate(&self, prompt: String) -> Result<String, RemoteFailure> {
        let api_key = self.api_key.as_deref().ok_or(RemoteFailure::NotConfigured)?;

        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PERSONA,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.call_chat_completions(api_key, request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;

    fn client_for(server: &MockServer, timeout_secs: u64) -> OpenRouterLLMClient {
        OpenRouterLLMClient::new(LLMConfig {
            api_key: Some("test-key".to_string()),
            api_url: server.uri(),
            model: "test/model".to_string(),
            timeout_secs,
            ..LLMConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn returns_trimmed_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "test/model",
                "max_tokens": 2000,
                "messages": [
                    { "role": "system", "content": SYSTEM_PERSONA },
                    { "role": "user", "content": "make soup" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gen-1",
                "choices": [{ "message": { "role": "assistant", "content": "  {\"recipes\": []}\n" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = client_for(&server, 30)
            .generate("make soup".to_string())
            .await
            .unwrap();

        assert_eq!(content, "{\"recipes\": []}");
    }

    #[tokio::test]
    async fn non_success_status_carries_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server, 30)
            .generate("prompt".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RemoteFailure::Status {
                status: 429,
                body: "rate limited".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_choices_is_malformed_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server, 30)
            .generate("prompt".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteFailure::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, 30)
            .generate("prompt".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteFailure::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "choices": [] }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, 1)
            .generate("prompt".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, RemoteFailure::Timeout);
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = OpenRouterLLMClient::new(LLMConfig::default()).unwrap();

        assert_eq!(
            client.generate("prompt".to_string()).await,
            Err(RemoteFailure::NotConfigured)
        );
    }
}
