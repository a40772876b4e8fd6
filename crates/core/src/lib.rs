//! Core domain types and traits for Tessera.
//!
//! This crate defines the value objects that flow through a chat turn
//! (sessions, turns, fragments) and the traits at the three collaborator
//! seams: session memory, text generation, and fragment rendering.
//! Everything else in the workspace depends on this crate and nothing
//! here depends on an implementation.

pub mod error;
pub mod fragment;
pub mod generation;
pub mod memory;
pub mod render;
pub mod turn;

pub use error::{Error, GenerationError, MemoryError, RenderError, Result};
pub use fragment::{Fragment, FragmentSet};
pub use generation::GenerationClient;
pub use memory::SessionMemory;
pub use render::FragmentRenderer;
pub use turn::{ChatRequest, Role, SessionKey, Turn};
