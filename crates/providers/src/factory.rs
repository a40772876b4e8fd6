//! Build a generation client from application configuration.

use crate::{EchoClient, OpenAiCompatClient};
use std::sync::Arc;
use tessera_core::generation::GenerationClient;
use tessera_config::AppConfig;
use tracing::warn;

/// Pick and configure the generation client the config asks for.
///
/// Falls back to the local echo client when no API key is available so
/// the gateway still serves a working page.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn GenerationClient> {
    if config.provider == "ollama" {
        let client = OpenAiCompatClient::ollama(config.api_url.as_deref(), &config.model)
            .with_temperature(config.temperature);
        return Arc::new(client);
    }

    match &config.api_key {
        Some(key) => {
            let client = match config.provider.as_str() {
                "openai" => OpenAiCompatClient::openai(key, &config.model),
                "openrouter" => OpenAiCompatClient::openrouter(key, &config.model),
                other => OpenAiCompatClient::new(
                    other,
                    config
                        .api_url
                        .clone()
                        .unwrap_or_else(|| "https://openrouter.ai/api/v1".into()),
                    key,
                    &config.model,
                ),
            };
            Arc::new(client.with_temperature(config.temperature))
        }
        None => {
            warn!("No API key configured, falling back to the echo client");
            Arc::new(EchoClient::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_yields_echo_client() {
        let config = AppConfig::default();
        let client = build_from_config(&config);
        assert_eq!(client.name(), "echo");
    }

    #[test]
    fn key_yields_configured_provider() {
        let config = AppConfig {
            api_key: Some("sk-test".into()),
            provider: "openai".into(),
            ..AppConfig::default()
        };
        let client = build_from_config(&config);
        assert_eq!(client.name(), "openai");
    }

    #[test]
    fn ollama_needs_no_key() {
        let config = AppConfig {
            provider: "ollama".into(),
            ..AppConfig::default()
        };
        let client = build_from_config(&config);
        assert_eq!(client.name(), "ollama");
    }
}
