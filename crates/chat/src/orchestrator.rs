//! The turn orchestrator — the core of the system.
//!
//! `handle_turn` coordinates the three collaborators (session memory,
//! generation client, fragment renderer) for one inbound request and
//! decides which fragments the response carries.
//!
//! Error shape: invalid input and generation failure are user-facing
//! outcomes, rendered as fragments on the 200 path. Only a rendering
//! failure propagates as an error, for the HTTP layer to turn into a
//! 5xx.

use serde_json::json;
use std::sync::Arc;
use tessera_core::error::RenderError;
use tessera_core::fragment::{Fragment, FragmentSet, REPLY_FRAGMENT, TRANSCRIPT_FRAGMENT};
use tessera_core::generation::GenerationClient;
use tessera_core::memory::SessionMemory;
use tessera_core::render::{
    FragmentRenderer, NOTICE_TEMPLATE, REPLY_TEMPLATE, TRANSCRIPT_TEMPLATE,
};
use tessera_core::turn::{ChatRequest, SessionKey, Turn};
use tracing::{debug, error, info, warn};

use crate::assembler;

/// Orchestrator settings, passed explicitly at construction.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Longest accepted message, in characters.
    pub max_message_length: usize,

    /// Generic text rendered when generation fails. The raw provider
    /// error never reaches the browser.
    pub error_message: String,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            max_message_length: 4000,
            error_message: "Something went wrong while generating a reply. Please try again."
                .into(),
        }
    }
}

/// Why a message was rejected before reaching the provider.
enum Rejection {
    Empty,
    TooLong { limit: usize },
}

impl Rejection {
    fn user_text(&self) -> String {
        match self {
            Rejection::Empty => "Please enter a message.".into(),
            Rejection::TooLong { limit } => {
                format!("That message is too long. The limit is {limit} characters.")
            }
        }
    }
}

/// Coordinates one chat turn end to end.
pub struct TurnOrchestrator {
    memory: Arc<dyn SessionMemory>,
    client: Arc<dyn GenerationClient>,
    renderer: Arc<dyn FragmentRenderer>,
    options: ChatOptions,
}

impl TurnOrchestrator {
    pub fn new(
        memory: Arc<dyn SessionMemory>,
        client: Arc<dyn GenerationClient>,
        renderer: Arc<dyn FragmentRenderer>,
        options: ChatOptions,
    ) -> Self {
        Self {
            memory,
            client,
            renderer,
            options,
        }
    }

    /// Handle one inbound chat turn.
    ///
    /// Not idempotent: repeated identical calls append new turns and may
    /// produce different replies. No retry loop lives here; retrying a
    /// transient provider failure is the caller's decision.
    pub async fn handle_turn(
        &self,
        request: &ChatRequest,
        session: &SessionKey,
    ) -> Result<FragmentSet, RenderError> {
        if let Some(rejection) = self.validate(&request.message) {
            debug!(session = %session, "Rejected message before generation");
            return self.notice(&rejection.user_text());
        }

        let history = match self.memory.read_turns(session).await {
            Ok(turns) => turns,
            Err(e) => {
                warn!(error = %e, session = %session, "History read failed, continuing with empty history");
                Vec::new()
            }
        };

        let submission = assembler::assemble(&history, &request.message);

        let reply = match self.client.generate(&submission).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, provider = %self.client.name(), session = %session, "Generation failed");
                return self.notice(&self.options.error_message);
            }
        };

        info!(session = %session, submitted_turns = submission.len(), "Turn completed");

        // Persist the exchange both-or-neither. A failure here is
        // best-effort territory: the reply still goes back to the user,
        // and the inconsistency with durable history is logged.
        let transcript = match self
            .memory
            .append_pair(session, &request.message, &reply)
            .await
        {
            Ok(_) => match self.memory.read_turns(session).await {
                Ok(turns) => turns,
                Err(e) => {
                    warn!(error = %e, session = %session, "Transcript re-read failed, rendering from this turn's data");
                    unsaved_transcript(submission, &reply)
                }
            },
            Err(e) => {
                error!(error = %e, session = %session, "Exchange append failed, reply returned without durable history");
                unsaved_transcript(submission, &reply)
            }
        };

        let reply_html = self
            .renderer
            .render(REPLY_TEMPLATE, json!({ "reply": reply }))?;
        let mut fragments = FragmentSet::primary(Fragment::new(REPLY_FRAGMENT, reply_html));

        let transcript_html = self.renderer.render(
            TRANSCRIPT_TEMPLATE,
            json!({ "turns": transcript, "thinking_id": request.thinking_id }),
        )?;
        fragments.push(Fragment::new(TRANSCRIPT_FRAGMENT, transcript_html));

        Ok(fragments)
    }

    fn validate(&self, message: &str) -> Option<Rejection> {
        if message.trim().is_empty() {
            return Some(Rejection::Empty);
        }
        let length = message.chars().count();
        if length > self.options.max_message_length {
            return Some(Rejection::TooLong {
                limit: self.options.max_message_length,
            });
        }
        None
    }

    /// A single user-visible fragment standing in for the reply.
    fn notice(&self, text: &str) -> Result<FragmentSet, RenderError> {
        let html = self
            .renderer
            .render(NOTICE_TEMPLATE, json!({ "message": text }))?;
        Ok(FragmentSet::primary(Fragment::new(REPLY_FRAGMENT, html)))
    }
}

/// The transcript for this turn when durable history is unavailable:
/// what was submitted plus the reply that was just generated.
fn unsaved_transcript(mut submission: Vec<Turn>, reply: &str) -> Vec<Turn> {
    let next_seq = submission
        .last()
        .map(|t| t.sequence_no + 1)
        .unwrap_or(0);
    submission.push(Turn::assistant(reply, next_seq));
    submission
}
