//! Graph state: per-field merge policies, the state container, and partial
//! updates returned by nodes.
//!
//! A field's merge policy is declared once in a [`StateSchema`] and applies
//! for the state's whole lifetime: `Append` fields concatenate node output
//! onto the existing sequence, `Replace` fields overwrite it. One [`State`]
//! instance flows through exactly one graph execution.

mod container;
mod schema;
mod update;

pub use container::State;
pub use schema::{MergePolicy, StateSchema};
pub use update::StateUpdate;

/// Conventional field name for the conversation message list.
pub const MESSAGES: &str = "messages";
