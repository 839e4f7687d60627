//! Graph builders for the four demo workflows.

mod basic;
mod chat;
mod pipeline;
mod route;

pub use basic::basic_graph;
pub use chat::{chat_graph, END_KEYWORDS};
pub use pipeline::pipeline_graph;
pub use route::route_graph;

use graphflow::{Message, State};

/// Prints the conversation of a final state, one line per turn.
pub fn print_conversation(state: &State) {
    for message in state.messages() {
        match message {
            Message::System { content } => println!("[System] {}", content),
            Message::Human { content } => println!("[User] {}", content),
            Message::Assistant { content } => println!("[Assistant] {}", content),
            Message::Tool {
                content,
                tool_call_id,
            } => println!("[Tool:{}] {}", tool_call_id, content),
        }
    }
}
