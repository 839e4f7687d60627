//! Shared graph builders for workflow integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use graphflow::{
    router, CompiledGraph, FnNode, Message, Node, NodeError, State, StateSchema, StateUpdate,
    WorkflowGraph, END,
};

/// Node that appends a fixed assistant reply.
pub fn reply_node(text: &'static str) -> Arc<dyn Node> {
    Arc::new(FnNode::new(move |_: &State| {
        Ok::<_, NodeError>(StateUpdate::new().with_message(Message::assistant(text)))
    }))
}

/// Intent-routing graph: classify reads the last human message and sets
/// `next_step`; conditional edges fan out to one handler per intent.
/// Earlier-declared keyword rules take precedence.
pub fn intent_graph() -> CompiledGraph {
    let mut graph = WorkflowGraph::new(StateSchema::messages_only().replace("next_step"));
    graph.add_node(
        "classify",
        Arc::new(FnNode::new(|state: &State| {
            let text = state.last_human_message().unwrap_or_default().to_lowercase();
            let next_step = if text.contains("bye") {
                "goodbye"
            } else if text.contains('?') {
                "question"
            } else {
                "respond"
            };
            Ok::<_, NodeError>(StateUpdate::new().set("next_step", next_step))
        })),
    );
    graph.add_node("goodbye", reply_node("Goodbye!"));
    graph.add_node("question", reply_node("Good question."));
    graph.add_node("respond", reply_node("Tell me more."));
    graph.set_entry_point("classify");
    graph.add_conditional_edges(
        "classify",
        router(|state| state.get_str("next_step").unwrap_or("respond").to_string()),
        HashMap::from([
            ("goodbye".to_string(), "goodbye".to_string()),
            ("question".to_string(), "question".to_string()),
            ("respond".to_string(), "respond".to_string()),
        ]),
    );
    graph.add_edge("goodbye", END);
    graph.add_edge("question", END);
    graph.add_edge("respond", END);
    graph.compile().expect("intent graph compiles")
}

/// Self-looping generate graph bounded by a `turn_count` ceiling.
pub fn bounded_loop_graph(ceiling: i64) -> CompiledGraph {
    let mut graph = WorkflowGraph::new(StateSchema::messages_only().replace("turn_count"));
    graph.add_node(
        "generate",
        Arc::new(FnNode::new(|state: &State| {
            let turn = state.get_i64("turn_count").unwrap_or(0);
            Ok::<_, NodeError>(
                StateUpdate::new()
                    .with_message(Message::assistant(format!("turn {}", turn + 1)))
                    .set("turn_count", turn + 1),
            )
        })),
    );
    graph.set_entry_point("generate");
    graph.add_conditional_edges(
        "generate",
        router(move |state| {
            if state.get_i64("turn_count").unwrap_or(0) >= ceiling {
                "done".to_string()
            } else {
                "again".to_string()
            }
        }),
        HashMap::from([
            ("again".to_string(), "generate".to_string()),
            ("done".to_string(), END.to_string()),
        ]),
    );
    graph.compile().expect("loop graph compiles")
}
