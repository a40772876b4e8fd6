//! SessionMemory trait — the append-only per-session turn log.
//!
//! The memory adapter is the only shared mutable resource in the system.
//! It owns two guarantees the orchestrator relies on:
//!
//! - **Pair atomicity**: an exchange is stored both-or-neither; a failed
//!   append leaves no orphan user turn.
//! - **Session-scoped serializability**: concurrent appends to the same
//!   session never collide on sequence numbers. Appends to different
//!   sessions need no coordination.

use crate::error::MemoryError;
use crate::turn::{SessionKey, Turn};
use async_trait::async_trait;

/// The session memory adapter contract.
///
/// Implementations: in-process (shipped), or any store that can provide
/// an atomic append-pair. Eviction and expiry are adapter concerns; the
/// orchestrator never destroys a session.
#[async_trait]
pub trait SessionMemory: Send + Sync {
    /// The backend name (e.g. "in_process").
    fn name(&self) -> &str;

    /// Read all turns for a session, oldest first, with the adapter's
    /// history window applied. An absent session reads as empty.
    async fn read_turns(&self, session: &SessionKey) -> Result<Vec<Turn>, MemoryError>;

    /// Append one completed exchange as a single atomic unit.
    ///
    /// The adapter assigns the two sequence numbers under its own
    /// per-session critical section and returns the stored pair, with
    /// the assistant turn numbered exactly one past the user turn.
    async fn append_pair(
        &self,
        session: &SessionKey,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<(Turn, Turn), MemoryError>;
}
