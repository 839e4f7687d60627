//! Streaming types for graph runs.
//!
//! Defines stream modes and events for value, update, and message-chunk
//! streaming. Used by `CompiledGraph::stream` and nodes that emit incremental
//! model output.

use crate::state::State;

/// Stream mode selector: which kinds of events to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Emit the full state after each node completes.
    Values,
    /// Emit incremental updates with node name and post-merge state.
    Updates,
    /// Emit message chunks (model streaming).
    Messages,
}

/// Metadata attached to streamed message chunks.
#[derive(Clone, Debug)]
pub struct StreamMetadata {
    /// Name of the node that produced the chunk.
    pub node: String,
}

/// One fragment of streamed message content. Fragments arrive in order and
/// concatenate into the final assistant content.
#[derive(Clone, Debug)]
pub struct MessageChunk {
    pub content: String,
}

/// Event emitted while running a graph.
#[derive(Clone, Debug)]
pub enum StreamEvent {
    /// Full state snapshot after a node finishes (post-merge).
    Values(State),
    /// Incremental update with the node name and the state after that node.
    Updates { node: String, state: State },
    /// Message chunk emitted by a node (e.g. model token streaming).
    Messages {
        chunk: MessageChunk,
        metadata: StreamMetadata,
    },
}
