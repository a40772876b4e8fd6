//! In-process session store — the shipped `SessionMemory` adapter.
//!
//! Each session owns its own lock, so appends within one session are
//! serialized (sequence numbers can never collide) while turns for
//! different sessions proceed with no coordination. The outer map lock
//! is held only long enough to look up or create a session entry, never
//! across an append.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tessera_core::error::MemoryError;
use tessera_core::memory::SessionMemory;
use tessera_core::turn::{SessionKey, Turn};
use tokio::sync::{Mutex, RwLock};

/// Per-session append-only turn log.
#[derive(Default)]
struct SessionLog {
    turns: Vec<Turn>,
    next_seq: u64,
}

/// An in-process backend storing every session's turn log in a map.
///
/// Sessions are created lazily on first append and never evicted here;
/// a bounded deployment would put an expiry policy at this layer.
pub struct InMemorySessions {
    sessions: RwLock<HashMap<SessionKey, Arc<Mutex<SessionLog>>>>,
    history_window: Option<usize>,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            history_window: None,
        }
    }

    /// Cap reads at the last `window` turns. `None` = unbounded.
    pub fn with_history_window(mut self, window: Option<usize>) -> Self {
        self.history_window = window;
        self
    }

    /// Fetch the session's log, creating it if absent.
    async fn log_for(&self, session: &SessionKey) -> Arc<Mutex<SessionLog>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(log) = sessions.get(session) {
                return log.clone();
            }
        }
        let mut sessions = self.sessions.write().await;
        sessions.entry(session.clone()).or_default().clone()
    }
}

impl Default for InMemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionMemory for InMemorySessions {
    fn name(&self) -> &str {
        "in_process"
    }

    async fn read_turns(&self, session: &SessionKey) -> Result<Vec<Turn>, MemoryError> {
        let log = {
            let sessions = self.sessions.read().await;
            match sessions.get(session) {
                Some(log) => log.clone(),
                None => return Ok(Vec::new()),
            }
        };

        let log = log.lock().await;
        let turns = match self.history_window {
            Some(window) if log.turns.len() > window => {
                log.turns[log.turns.len() - window..].to_vec()
            }
            _ => log.turns.clone(),
        };
        Ok(turns)
    }

    async fn append_pair(
        &self,
        session: &SessionKey,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<(Turn, Turn), MemoryError> {
        let log = self.log_for(session).await;
        let mut log = log.lock().await;

        let user = Turn::user(user_text, log.next_seq);
        let assistant = Turn::assistant(assistant_text, log.next_seq + 1);
        log.turns.push(user.clone());
        log.turns.push(assistant.clone());
        log.next_seq += 2;

        Ok((user, assistant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::turn::Role;

    #[tokio::test]
    async fn absent_session_reads_empty() {
        let mem = InMemorySessions::new();
        let turns = mem.read_turns(&SessionKey::default()).await.unwrap();
        assert!(turns.is_empty());
    }

    #[tokio::test]
    async fn append_assigns_contiguous_pair() {
        let mem = InMemorySessions::new();
        let key = SessionKey::default();

        let (user, assistant) = mem.append_pair(&key, "hi", "hello").await.unwrap();
        assert_eq!(user.sequence_no, 0);
        assert_eq!(assistant.sequence_no, 1);

        let (user2, _) = mem.append_pair(&key, "again", "sure").await.unwrap();
        assert_eq!(user2.sequence_no, 2);
    }

    #[tokio::test]
    async fn turns_alternate_starting_with_user() {
        let mem = InMemorySessions::new();
        let key = SessionKey::default();
        mem.append_pair(&key, "a", "b").await.unwrap();
        mem.append_pair(&key, "c", "d").await.unwrap();

        let turns = mem.read_turns(&key).await.unwrap();
        assert_eq!(turns.len(), 4);
        for (i, turn) in turns.iter().enumerate() {
            assert_eq!(turn.sequence_no, i as u64);
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected);
        }
    }

    #[tokio::test]
    async fn history_window_caps_reads_not_writes() {
        let mem = InMemorySessions::new().with_history_window(Some(2));
        let key = SessionKey::default();
        mem.append_pair(&key, "one", "1").await.unwrap();
        mem.append_pair(&key, "two", "2").await.unwrap();

        let turns = mem.read_turns(&key).await.unwrap();
        assert_eq!(turns.len(), 2);
        // The window keeps the most recent turns, sequence intact.
        assert_eq!(turns[0].text, "two");
        assert_eq!(turns[0].sequence_no, 2);

        // The next append still continues the full sequence.
        let (user, _) = mem.append_pair(&key, "three", "3").await.unwrap();
        assert_eq!(user.sequence_no, 4);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let mem = InMemorySessions::new();
        let a = SessionKey::from("a");
        let b = SessionKey::from("b");
        mem.append_pair(&a, "hi", "hello").await.unwrap();

        assert_eq!(mem.read_turns(&a).await.unwrap().len(), 2);
        assert!(mem.read_turns(&b).await.unwrap().is_empty());

        let (user, _) = mem.append_pair(&b, "first", "reply").await.unwrap();
        assert_eq!(user.sequence_no, 0);
    }

    #[tokio::test]
    async fn concurrent_appends_never_collide() {
        let mem = Arc::new(InMemorySessions::new());
        let key = SessionKey::default();

        let mut handles = Vec::new();
        for i in 0..16 {
            let mem = mem.clone();
            let key = key.clone();
            handles.push(tokio::spawn(async move {
                mem.append_pair(&key, &format!("q{i}"), &format!("a{i}"))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let turns = mem.read_turns(&key).await.unwrap();
        assert_eq!(turns.len(), 32);
        for (i, turn) in turns.iter().enumerate() {
            assert_eq!(turn.sequence_no, i as u64);
        }
    }
}
