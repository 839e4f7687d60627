//! Routing demo: keyword intent classification with conditional edges.

use std::collections::HashMap;
use std::sync::Arc;

use graphflow::{
    router, CompilationError, CompiledGraph, FnNode, Message, Node, NodeError, State, StateSchema,
    StateUpdate, WorkflowGraph, END,
};

fn handler(reply: &'static str) -> Arc<dyn Node> {
    Arc::new(FnNode::new(move |_: &State| {
        Ok::<_, NodeError>(StateUpdate::new().with_message(Message::assistant(reply)))
    }))
}

/// classify → {greeting | question | thanks | general} → END.
///
/// The classifier writes a `next_step` flag; the router only reads it.
/// Keyword rules apply in declaration order, so a greeting containing a
/// question mark still classifies as a greeting.
pub fn route_graph() -> Result<CompiledGraph, CompilationError> {
    let mut graph = WorkflowGraph::new(StateSchema::messages_only().replace("next_step"));

    graph.add_node(
        "classify",
        Arc::new(FnNode::new(|state: &State| {
            let text = state.last_human_message().unwrap_or_default().to_lowercase();
            let next_step = if text.contains("hello") || text.contains("hi ") || text == "hi" {
                "greeting"
            } else if text.contains('?') {
                "question"
            } else if text.contains("thank") {
                "thanks"
            } else {
                "general"
            };
            Ok::<_, NodeError>(StateUpdate::new().set("next_step", next_step))
        })),
    );
    graph.add_node("greeting", handler("Hello! Nice to meet you."));
    graph.add_node("question", handler("Let me think about that question."));
    graph.add_node("thanks", handler("You're welcome!"));
    graph.add_node("general", handler("Tell me more."));

    graph.set_entry_point("classify");
    graph.add_conditional_edges(
        "classify",
        router(|state| state.get_str("next_step").unwrap_or("general").to_string()),
        HashMap::from([
            ("greeting".to_string(), "greeting".to_string()),
            ("question".to_string(), "question".to_string()),
            ("thanks".to_string(), "thanks".to_string()),
            ("general".to_string(), "general".to_string()),
        ]),
    );
    graph.add_edge("greeting", END);
    graph.add_edge("question", END);
    graph.add_edge("thanks", END);
    graph.add_edge("general", END);
    graph.compile()
}
