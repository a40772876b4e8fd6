//! FragmentRenderer trait — the markup rendering boundary.
//!
//! Given a template name and payload data, a renderer returns a markup
//! string. Output escaping is the renderer's responsibility: the
//! orchestrator passes raw text through and trusts this boundary to make
//! it HTML-safe.

use crate::error::RenderError;

/// Template name for the primary reply fragment.
pub const REPLY_TEMPLATE: &str = "reply.html";

/// Template name for the user-visible notice fragment (validation and
/// degraded-generation paths).
pub const NOTICE_TEMPLATE: &str = "notice.html";

/// Template name for the auxiliary transcript fragment.
pub const TRANSCRIPT_TEMPLATE: &str = "transcript.html";

/// The rendering collaborator contract.
///
/// Not async: rendering is pure CPU work over already-resolved data.
pub trait FragmentRenderer: Send + Sync {
    /// Render the named template with the given context.
    fn render(&self, template: &str, ctx: serde_json::Value) -> Result<String, RenderError>;
}
