//! Session store: per-session state keyed by opaque session ids.
//!
//! A graph execution exclusively owns its state; continuity across
//! invocations comes from a store the caller injects. Sessions are accessed
//! only by id — never iterated or merged across ids — so isolation is
//! structural, not conventional.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::state::{State, StateSchema};

/// Keyed state storage for memory-augmented graphs.
///
/// `get_or_create` hands back the last state saved for a session (or a fresh
/// one); the caller runs the graph on it and `put`s the final state back.
/// Injected as a dependency rather than living in process-global state so
/// lifecycle and isolation stay explicit and testable.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored state for `session_id`, creating an empty one on
    /// first access.
    async fn get_or_create(&self, session_id: &str) -> State;

    /// Saves the state for `session_id`, replacing any previous snapshot.
    async fn put(&self, session_id: &str, state: State);
}

/// In-memory session store. All data is lost when the store is dropped.
pub struct InMemorySessionStore {
    schema: Arc<StateSchema>,
    sessions: DashMap<String, State>,
}

impl InMemorySessionStore {
    /// Creates a store whose fresh sessions use `schema`.
    pub fn new(schema: Arc<StateSchema>) -> Self {
        Self {
            schema,
            sessions: DashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, session_id: &str) -> State {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| State::new(self.schema.clone()))
            .clone()
    }

    async fn put(&self, session_id: &str, state: State) {
        self.sessions.insert(session_id.to_string(), state);
    }
}
