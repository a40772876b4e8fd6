//! Turn orchestration for Tessera.
//!
//! One inbound chat request becomes one orchestrated turn: read session
//! history, assemble the prompt, call the generation client, persist the
//! exchange, and shape the result into named HTML fragments.

pub mod assembler;
pub mod orchestrator;

pub use orchestrator::{ChatOptions, TurnOrchestrator};
