//! Demo graph tests driven by the mock model client.

use graphflow::{Message, MockLlm, State};

use crate::demos::{basic_graph, chat_graph, pipeline_graph, route_graph};

async fn run_with_message(
    graph: &graphflow::CompiledGraph,
    message: &str,
) -> State {
    let mut state = graph.initial_state();
    state.push_message(Message::human(message));
    graph.invoke(state).await.expect("graph run succeeds")
}

fn last_assistant(state: &State) -> String {
    state
        .messages()
        .iter()
        .rev()
        .find(|m| matches!(m, Message::Assistant { .. }))
        .map(|m| m.content().to_string())
        .expect("an assistant message")
}

/// **Scenario**: The basic demo answers a single message with one model turn.
#[tokio::test]
async fn basic_demo_answers_once() {
    let graph = basic_graph(Box::new(MockLlm::new("pong"))).unwrap();
    let out = run_with_message(&graph, "ping").await;
    assert_eq!(last_assistant(&out), "pong");
    assert_eq!(out.messages().len(), 2);
}

/// **Scenario**: The pipeline demo runs all four nodes and records a summary
/// with the final turn count and message count.
#[tokio::test]
async fn pipeline_demo_summarizes_run() {
    let graph = pipeline_graph().unwrap();
    let out = run_with_message(&graph, "hello pipeline").await;

    assert_eq!(out.get_i64("turn_count"), Some(1));
    let summary = out.get("summary").expect("summary is set");
    assert_eq!(summary["total_turns"], 1);
    // human + system + greet + respond
    assert_eq!(summary["message_count"], 4);
    assert_eq!(last_assistant(&out), "You said: hello pipeline");
}

/// **Scenario**: The routing demo classifies by keyword, earlier rules first.
#[tokio::test]
async fn route_demo_classifies_intents() {
    let cases = [
        ("hello there", "greeting"),
        ("what is rust?", "question"),
        ("thanks a lot", "thanks"),
        ("tuesday weather", "general"),
        // a greeting containing a question mark is still a greeting
        ("hello?", "greeting"),
    ];
    for (message, expected) in cases {
        let graph = route_graph().unwrap();
        let out = run_with_message(&graph, message).await;
        assert_eq!(out.get_str("next_step"), Some(expected), "for {:?}", message);
    }
}

/// **Scenario**: A normal chat turn generates a reply and bumps the counter.
#[tokio::test]
async fn chat_demo_counts_turns() {
    let graph = chat_graph(Box::new(MockLlm::echo()), 10).unwrap();
    let out = run_with_message(&graph, "how are you").await;

    assert_eq!(out.get_i64("turn_count"), Some(1));
    assert_eq!(out.get_bool("should_end"), Some(false));
    assert_eq!(last_assistant(&out), "how are you");
}

/// **Scenario**: An end keyword routes straight to the goodbye node.
#[tokio::test]
async fn chat_demo_ends_on_keyword() {
    let graph = chat_graph(Box::new(MockLlm::echo()), 10).unwrap();
    let out = run_with_message(&graph, "ok bye now").await;

    assert_eq!(out.get_bool("should_end"), Some(true));
    assert_eq!(out.get_i64("turn_count"), Some(0));
    assert!(last_assistant(&out).contains("Goodbye"));
}

/// **Scenario**: The turn bound ends the conversation even without a keyword.
#[tokio::test]
async fn chat_demo_respects_turn_bound() {
    let graph = chat_graph(Box::new(MockLlm::echo()), 0).unwrap();
    let out = run_with_message(&graph, "still chatting").await;

    assert_eq!(out.get_bool("should_end"), Some(true));
    assert!(last_assistant(&out).contains("Goodbye"));
}

/// **Scenario**: Reinvoking the chat graph on its own output carries the
/// conversation forward, one counted turn per invocation.
#[tokio::test]
async fn chat_demo_reinvocation_accumulates() {
    let graph = chat_graph(Box::new(MockLlm::echo()), 10).unwrap();

    let mut state = graph.initial_state();
    state.push_message(Message::human("first"));
    let mut state = graph.invoke(state).await.unwrap();
    state.push_message(Message::human("second"));
    let state = graph.invoke(state).await.unwrap();

    assert_eq!(state.get_i64("turn_count"), Some(2));
    assert_eq!(last_assistant(&state), "second");
}
