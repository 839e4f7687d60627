//! Logging hooks for graph execution.
//!
//! With the `tracing` feature, events go through the `tracing` crate;
//! without it, debug lines go to stderr so normal output stays clean.

/// Log node execution start.
pub(crate) fn log_node_start(node: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node, "starting node");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] starting node: {}", node);
}

/// Log that state was merged after a node ran.
pub(crate) fn log_state_update(node: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node, "state merged");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] state merged after node: {}", node);
}

/// Log graph execution start.
pub(crate) fn log_graph_start() {
    #[cfg(feature = "tracing")]
    tracing::info!("starting graph execution");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] starting graph execution");
}

/// Log graph execution completion.
pub(crate) fn log_graph_complete() {
    #[cfg(feature = "tracing")]
    tracing::info!("graph execution complete");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] graph execution complete");
}

/// Log graph execution error.
pub(crate) fn log_graph_error(error: &crate::error::GraphError) {
    #[cfg(feature = "tracing")]
    tracing::error!(?error, "graph execution error");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] graph execution error: {}", error);
}
