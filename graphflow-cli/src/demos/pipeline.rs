//! Pipeline demo: linear chain with mixed merge policies.
//!
//! Messages append while turn_count and summary replace, so the chain shows
//! both policies at work without any conditional routing.

use std::sync::Arc;

use serde_json::json;

use graphflow::{
    CompilationError, CompiledGraph, FnNode, Message, NodeError, State, StateSchema, StateUpdate,
    WorkflowGraph, END,
};

/// init → greet → respond → summarize, straight through to END.
pub fn pipeline_graph() -> Result<CompiledGraph, CompilationError> {
    let schema = StateSchema::messages_only()
        .replace("turn_count")
        .replace("summary");
    let mut graph = WorkflowGraph::new(schema);

    graph.add_node(
        "init",
        Arc::new(FnNode::new(|_: &State| {
            Ok::<_, NodeError>(
                StateUpdate::new()
                    .with_message(Message::system("You are a concise assistant."))
                    .set("turn_count", 0),
            )
        })),
    );
    graph.add_node(
        "greet",
        Arc::new(FnNode::new(|_: &State| {
            Ok::<_, NodeError>(
                StateUpdate::new().with_message(Message::assistant("Hello! Ask me anything.")),
            )
        })),
    );
    graph.add_node(
        "respond",
        Arc::new(FnNode::new(|state: &State| {
            let turn = state.get_i64("turn_count").unwrap_or(0);
            let reply = match state.last_human_message() {
                Some(text) => format!("You said: {}", text),
                None => "I did not catch a question.".to_string(),
            };
            Ok::<_, NodeError>(
                StateUpdate::new()
                    .with_message(Message::assistant(reply))
                    .set("turn_count", turn + 1),
            )
        })),
    );
    graph.add_node(
        "summarize",
        Arc::new(FnNode::new(|state: &State| {
            let summary = json!({
                "total_turns": state.get_i64("turn_count").unwrap_or(0),
                "message_count": state.messages().len(),
            });
            Ok::<_, NodeError>(StateUpdate::new().set("summary", summary))
        })),
    );

    graph.set_entry_point("init");
    graph.add_edge("init", "greet");
    graph.add_edge("greet", "respond");
    graph.add_edge("respond", "summarize");
    graph.add_edge("summarize", END);
    graph.compile()
}
