//! Chat demo: turn-bounded conversation loop with end-keyword detection.
//!
//! The graph itself is invoked once per user turn; the CLI keeps the state
//! alive between invocations through a session store. The loop bound lives
//! in the router, which reads the `turn_count` field the tally node bumps.

use std::collections::HashMap;
use std::sync::Arc;

use graphflow::{
    router, CompilationError, CompiledGraph, FnNode, LlmClient, Message, ModelNode, NodeError,
    State, StateSchema, StateUpdate, WorkflowGraph, END,
};

/// Words that end the conversation when they appear in a user turn.
pub const END_KEYWORDS: [&str; 4] = ["bye", "goodbye", "exit", "quit"];

fn wants_to_end(state: &State) -> bool {
    let text = state.last_human_message().unwrap_or_default().to_lowercase();
    END_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// init → check_end → {generate → tally | goodbye} → END.
///
/// One invocation handles one user turn. The conversation ends when the
/// user says one of [`END_KEYWORDS`] or `turn_count` reaches `max_turns`;
/// callers can read `should_end` from the final state to stop their loop.
pub fn chat_graph(
    llm: Box<dyn LlmClient>,
    max_turns: i64,
) -> Result<CompiledGraph, CompilationError> {
    let schema = StateSchema::messages_only()
        .replace("turn_count")
        .replace("should_end");
    let mut graph = WorkflowGraph::new(schema);

    graph.add_node(
        "init",
        Arc::new(FnNode::new(|state: &State| {
            let mut update = StateUpdate::new();
            let has_system = state
                .messages()
                .iter()
                .any(|m| matches!(m, Message::System { .. }));
            if !has_system {
                update = update.with_message(Message::system(
                    "You are a friendly chat assistant. Keep answers short.",
                ));
            }
            if state.get_i64("turn_count").is_none() {
                update = update.set("turn_count", 0);
            }
            Ok::<_, NodeError>(update)
        })),
    );
    graph.add_node(
        "check_end",
        Arc::new(FnNode::new(|state: &State| {
            Ok::<_, NodeError>(StateUpdate::new().set("should_end", wants_to_end(state)))
        })),
    );
    graph.add_node("generate", Arc::new(ModelNode::new(llm)));
    graph.add_node(
        "tally",
        Arc::new(FnNode::new(|state: &State| {
            let turn = state.get_i64("turn_count").unwrap_or(0);
            Ok::<_, NodeError>(StateUpdate::new().set("turn_count", turn + 1))
        })),
    );
    graph.add_node(
        "goodbye",
        Arc::new(FnNode::new(|_: &State| {
            Ok::<_, NodeError>(
                StateUpdate::new()
                    .with_message(Message::assistant("Goodbye! It was nice talking to you."))
                    .set("should_end", true),
            )
        })),
    );

    graph.set_entry_point("init");
    graph.add_edge("init", "check_end");
    graph.add_conditional_edges(
        "check_end",
        router(move |state| {
            let ending = state.get_bool("should_end").unwrap_or(false);
            let turns = state.get_i64("turn_count").unwrap_or(0);
            if ending || turns >= max_turns {
                "goodbye".to_string()
            } else {
                "generate".to_string()
            }
        }),
        HashMap::from([
            ("generate".to_string(), "generate".to_string()),
            ("goodbye".to_string(), "goodbye".to_string()),
        ]),
    );
    graph.add_edge("generate", "tally");
    graph.add_edge("tally", END);
    graph.add_edge("goodbye", END);
    graph.compile()
}
