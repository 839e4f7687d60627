//! Run context passed into nodes for streaming-aware execution.
//!
//! Holds the current node name, an optional stream sender, and the selected
//! stream modes.

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::stream::{StreamEvent, StreamMode};

#[derive(Clone)]
pub struct RunContext {
    /// Name of the node currently executing; used as chunk metadata.
    pub node: String,
    /// Optional sender for streaming events.
    pub stream_tx: Option<mpsc::Sender<StreamEvent>>,
    /// Enabled stream modes (Values, Updates, Messages).
    pub stream_mode: HashSet<StreamMode>,
}

impl RunContext {
    /// True when the context wants message-chunk streaming and has a channel.
    pub fn wants_message_chunks(&self) -> bool {
        self.stream_tx.is_some() && self.stream_mode.contains(&StreamMode::Messages)
    }
}
