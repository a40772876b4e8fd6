//! GenerationClient trait — the abstraction over text-generation providers.
//!
//! A client accepts the ordered turn sequence (history plus the new user
//! turn) and returns generated reply text, or fails. The orchestrator
//! calls `generate()` without knowing which provider is behind it.

use crate::error::GenerationError;
use crate::turn::Turn;
use async_trait::async_trait;

/// The text-generation provider contract.
///
/// Implementations: OpenAI-compatible endpoints, a local echo client for
/// offline runs, scripted fakes in tests.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// A human-readable name for this client (e.g. "openrouter").
    fn name(&self) -> &str;

    /// Submit the ordered turn sequence and return the generated reply.
    ///
    /// The call is synchronous relative to the turn: no retry loop, no
    /// memory locks held while awaiting. Provider-side timeouts surface
    /// as a `GenerationError`.
    async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError>;

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> Result<bool, GenerationError> {
        Ok(true)
    }
}
