//! Echo client — a local, no-network generation client.
//!
//! Used when no API key is configured so the gateway still serves a
//! working page, and in examples where a deterministic reply is wanted.
//! It deliberately does not quote the user's message back.

use async_trait::async_trait;
use tessera_core::error::GenerationError;
use tessera_core::generation::GenerationClient;
use tessera_core::turn::Turn;

/// A generation client that acknowledges the conversation instead of
/// calling a provider.
#[derive(Default)]
pub struct EchoClient;

impl EchoClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationClient for EchoClient {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError> {
        let Some(last) = turns.last() else {
            return Err(GenerationError::NotConfigured(
                "Empty turn sequence submitted".into(),
            ));
        };
        Ok(format!(
            "No generation provider is configured. Received a {}-character message \
             (turn {} of this conversation).",
            last.text.chars().count(),
            turns.len()
        ))
    }
}
