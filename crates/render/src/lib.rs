//! HTML fragment rendering for Tessera.
//!
//! Implements the `FragmentRenderer` boundary with minijinja. The
//! templates are compiled into the binary with `include_str!` for
//! single-binary deployment, and the `.html` names keep minijinja's
//! auto-escaping on: raw user and provider text passed through the
//! orchestrator comes out HTML-safe.

use minijinja::Environment;
use tessera_core::error::RenderError;
use tessera_core::render::{
    FragmentRenderer, NOTICE_TEMPLATE, REPLY_TEMPLATE, TRANSCRIPT_TEMPLATE,
};

/// The embedded template sources.
const TEMPLATES: &[(&str, &str)] = &[
    (REPLY_TEMPLATE, include_str!("../templates/reply.html")),
    (NOTICE_TEMPLATE, include_str!("../templates/notice.html")),
    (
        TRANSCRIPT_TEMPLATE,
        include_str!("../templates/transcript.html"),
    ),
];

/// A `FragmentRenderer` backed by embedded minijinja templates.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| RenderError::Template {
                    name: (*name).to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(Self { env })
    }
}

impl FragmentRenderer for TemplateRenderer {
    fn render(&self, template: &str, ctx: serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| RenderError::Template {
                name: template.to_string(),
                reason: e.to_string(),
            })?;

        tmpl.render(ctx).map_err(|e| RenderError::Render {
            name: template.to_string(),
            reason: e.to_string(),
        })
    }
}
