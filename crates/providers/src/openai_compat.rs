//! OpenAI-compatible generation client.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, and any endpoint that
//! exposes an OpenAI-compatible `/v1/chat/completions` route. Turn-based
//! only — one full completion per request, no streaming.

use async_trait::async_trait;
use serde::Deserialize;
use tessera_core::error::GenerationError;
use tessera_core::generation::GenerationClient;
use tessera_core::turn::{Role, Turn};
use tracing::{debug, warn};

/// An OpenAI-compatible generation client.
pub struct OpenAiCompatClient {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Create a new OpenAI-compatible client.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: 0.7,
            client,
        }
    }

    /// Create an OpenRouter client (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key, model)
    }

    /// Create an OpenAI client (convenience constructor).
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key, model)
    }

    /// Create an Ollama client (convenience constructor).
    pub fn ollama(base_url: Option<&str>, model: impl Into<String>) -> Self {
        Self::new(
            "ollama",
            base_url.unwrap_or("http://localhost:11434/v1"),
            "ollama", // Ollama doesn't need a real key
            model,
        )
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Convert the submitted turn sequence to OpenAI API format.
    fn to_api_messages(turns: &[Turn]) -> Vec<serde_json::Value> {
        turns
            .iter()
            .map(|t| {
                serde_json::json!({
                    "role": match t.role {
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    },
                    "content": t.text,
                })
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[async_trait]
impl GenerationClient for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": Self::to_api_messages(turns),
            "temperature": self.temperature,
            "stream": false,
        });

        debug!(provider = %self.name, model = %self.model, turns = turns.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(e.to_string())
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(GenerationError::RateLimited { retry_after_secs: 5 });
        }

        if status == 401 || status == 403 {
            return Err(GenerationError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(GenerationError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Network(format!("Invalid response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::ApiError {
                status_code: 200,
                message: "Response contained no completion".into(),
            })
    }

    async fn health_check(&self) -> Result<bool, GenerationError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = OpenAiCompatClient::new("test", "http://localhost:1234/v1/", "key", "m");
        assert_eq!(client.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn turns_map_to_api_roles_in_order() {
        let turns = vec![
            Turn::user("hi", 0),
            Turn::assistant("hello", 1),
            Turn::user("how are you", 2),
        ];
        let messages = OpenAiCompatClient::to_api_messages(&turns);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[2]["content"], "how are you");
    }

    #[test]
    fn convenience_constructors_pick_endpoints() {
        assert_eq!(
            OpenAiCompatClient::openrouter("k", "m").base_url,
            "https://openrouter.ai/api/v1"
        );
        assert_eq!(
            OpenAiCompatClient::ollama(None, "llama3").base_url,
            "http://localhost:11434/v1"
        );
    }
}
