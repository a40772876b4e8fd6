//! Error types for the Tessera domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator boundary has its own error type; the top-level
//! `Error` wraps them for callers that cross boundaries.

use thiserror::Error;

/// The top-level error type for all Tessera operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures from the text-generation provider boundary.
///
/// The orchestrator recovers all of these locally into a degraded
/// fragment; the raw message never reaches the browser.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Failures from the session memory boundary.
///
/// An `append_pair` failure is atomic: no partial exchange is ever
/// observable afterwards.
#[derive(Debug, Clone, Error)]
pub enum MemoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Concurrent append conflict on session '{0}'")]
    WriteConflict(String),
}

/// Failures from the fragment rendering boundary.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Template '{name}' failed to load: {reason}")]
    Template { name: String, reason: String },

    #[error("Rendering '{name}' failed: {reason}")]
    Render { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_displays_status() {
        let err = Error::Generation(GenerationError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn render_error_names_template() {
        let err = Error::Render(RenderError::Render {
            name: "reply.html".into(),
            reason: "undefined variable".into(),
        });
        assert!(err.to_string().contains("reply.html"));
    }

    #[test]
    fn memory_conflict_names_session() {
        let err = MemoryError::WriteConflict("lobby".into());
        assert!(err.to_string().contains("lobby"));
    }
}
