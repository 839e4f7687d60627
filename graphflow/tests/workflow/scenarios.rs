//! End-to-end scenario flows: message accumulation, keyword routing, and a
//! counter-bounded self-loop.

use graphflow::Message;

use crate::common::{bounded_loop_graph, intent_graph};

/// **Scenario**: Entry node appends an assistant reply after the caller's
/// human message; output is exactly [human("hello"), assistant("hi")].
#[tokio::test]
async fn reply_appends_after_initial_message() {
    use std::sync::Arc;
    use graphflow::{FnNode, NodeError, State, StateSchema, StateUpdate, WorkflowGraph, END};

    let mut graph = WorkflowGraph::new(StateSchema::messages_only());
    graph.add_node(
        "reply",
        Arc::new(FnNode::new(|_: &State| {
            Ok::<_, NodeError>(StateUpdate::new().with_message(Message::assistant("hi")))
        })),
    );
    graph.set_entry_point("reply");
    graph.add_edge("reply", END);
    let compiled = graph.compile().unwrap();

    let mut state = compiled.initial_state();
    state.push_message(Message::human("hello"));
    let out = compiled.invoke(state).await.unwrap();

    assert_eq!(
        out.messages(),
        vec![Message::human("hello"), Message::assistant("hi")]
    );
}

/// **Scenario**: "bye" routes to the goodbye handler exactly once and never
/// to the default responder.
#[tokio::test]
async fn bye_routes_to_goodbye_exactly_once() {
    let graph = intent_graph();
    let mut state = graph.initial_state();
    state.push_message(Message::human("ok bye now"));
    let out = graph.invoke(state).await.unwrap();

    let replies: Vec<_> = out
        .messages()
        .iter()
        .filter(|m| matches!(m, Message::Assistant { .. }))
        .map(|m| m.content().to_string())
        .collect();
    assert_eq!(replies, vec!["Goodbye!".to_string()]);
    assert_eq!(out.get_str("next_step"), Some("goodbye"));
}

/// **Scenario**: A question mark routes to the question handler; anything
/// else falls through to the default responder.
#[tokio::test]
async fn question_and_default_routes() {
    let graph = intent_graph();

    let mut state = graph.initial_state();
    state.push_message(Message::human("What rotates the earth?"));
    let out = graph.invoke(state).await.unwrap();
    assert_eq!(out.get_str("next_step"), Some("question"));

    let mut state = graph.initial_state();
    state.push_message(Message::human("nice weather today"));
    let out = graph.invoke(state).await.unwrap();
    assert_eq!(out.get_str("next_step"), Some("respond"));
}

/// **Scenario**: With no human message at all, the classifier's default rule
/// applies and the run still terminates normally.
#[tokio::test]
async fn empty_conversation_takes_default_route() {
    let graph = intent_graph();
    let out = graph.invoke(graph.initial_state()).await.unwrap();
    assert_eq!(out.get_str("next_step"), Some("respond"));
}

/// **Scenario**: turn_count starts at 0 and increments each pass through the
/// generate node; after 10 iterations the bound-check router returns the
/// terminal key and the final state has turn_count == 10.
#[tokio::test]
async fn bounded_self_loop_stops_at_ceiling() {
    let graph = bounded_loop_graph(10);
    let out = graph.invoke(graph.initial_state()).await.unwrap();
    assert_eq!(out.get_i64("turn_count"), Some(10));
    assert_eq!(out.messages().len(), 10);
}

/// **Scenario**: Re-invoking on the previous output continues accumulating —
/// the message list is never truncated automatically.
#[tokio::test]
async fn reinvocation_accumulates_messages() {
    let graph = intent_graph();
    let mut state = graph.initial_state();
    state.push_message(Message::human("hello there"));
    let mut state = graph.invoke(state).await.unwrap();

    state.push_message(Message::human("bye"));
    let out = graph.invoke(state).await.unwrap();

    // human, assistant, human, assistant
    assert_eq!(out.messages().len(), 4);
    assert_eq!(out.get_str("next_step"), Some("goodbye"));
}
