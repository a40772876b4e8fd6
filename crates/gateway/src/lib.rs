//! HTTP gateway for Tessera.
//!
//! Exposes the chat endpoint, a health check, and the embedded
//! frontend. The endpoint speaks HTML, not JSON: a successful turn and
//! a gracefully degraded one both come back as a 200 carrying named
//! fragments, and only a rendering failure surfaces as a 5xx.
//!
//! Built on Axum.

pub mod encoder;
pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::{Form, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use tessera_chat::{ChatOptions, TurnOrchestrator};
use tessera_core::turn::{ChatRequest, SessionKey};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub orchestrator: TurnOrchestrator,
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// Builds the collaborators once from config and shares them behind the
/// orchestrator for the lifetime of the process.
pub async fn start(config: tessera_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let memory = Arc::new(
        tessera_memory::InMemorySessions::new().with_history_window(config.chat.window()),
    );
    let client = tessera_providers::build_from_config(&config);
    let renderer = Arc::new(tessera_render::TemplateRenderer::new()?);

    let orchestrator = TurnOrchestrator::new(
        memory,
        client,
        renderer,
        ChatOptions {
            max_message_length: config.chat.max_message_length,
            error_message: config.chat.error_message.clone(),
        },
    );

    let state = Arc::new(GatewayState { orchestrator });
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

/// The chat form as the frontend posts it. `thinkingId` is the wire
/// spelling; the field is opaque echo data either way.
#[derive(Deserialize)]
struct ChatForm {
    message: String,

    #[serde(default, alias = "thinkingId")]
    thinking_id: Option<String>,

    #[serde(default)]
    session: Option<String>,
}

async fn chat_handler(
    State(state): State<SharedState>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, StatusCode> {
    let session = form.session.map(SessionKey).unwrap_or_default();

    let mut request = ChatRequest::new(&form.message);
    if let Some(id) = form.thinking_id {
        request = request.with_thinking_id(id);
    }

    match state.orchestrator.handle_turn(&request, &session).await {
        Ok(set) => Ok(Html(encoder::encode(&set))),
        Err(e) => {
            error!(error = %e, session = %session, "Turn could not be rendered");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
