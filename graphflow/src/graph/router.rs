//! Router: selects the next node name from the post-merge state.

use std::sync::Arc;

use crate::state::State;

/// Routing function for a conditional edge set.
///
/// Invoked with the state *after* the source node's update has been merged;
/// the returned key is looked up in the edge set's destination mapping.
/// Routers must be total over the fields they read — when an expected field
/// is absent, fall back to a deterministic default key rather than fail —
/// and deterministic for a fixed state. Exactly one key is returned; when
/// several classification rules could match, declare the highest-precedence
/// rule first.
pub type Router = Arc<dyn Fn(&State) -> String + Send + Sync>;

/// Wraps a closure as a [`Router`].
pub fn router<F>(f: F) -> Router
where
    F: Fn(&State) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}
