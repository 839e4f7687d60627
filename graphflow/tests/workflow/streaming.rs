//! Streaming behavior: event order and model chunk forwarding.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_stream::StreamExt;

use graphflow::{
    MockLlm, ModelNode, Message, StateSchema, StreamEvent, StreamMode, WorkflowGraph, END,
};

fn model_graph(reply: &str) -> graphflow::CompiledGraph {
    let mut graph = WorkflowGraph::new(StateSchema::messages_only());
    graph.add_node("generate", Arc::new(ModelNode::new(Box::new(MockLlm::new(reply)))));
    graph.set_entry_point("generate");
    graph.add_edge("generate", END);
    graph.compile().expect("model graph compiles")
}

/// **Scenario**: With Messages streaming on, chunks tagged with the node name
/// arrive before the final Values snapshot and concatenate to the assistant
/// reply.
#[tokio::test]
async fn message_chunks_concatenate_to_reply() {
    let graph = model_graph("three word reply");
    let mut state = graph.initial_state();
    state.push_message(Message::human("go"));

    let stream = graph.stream(
        state,
        HashSet::from_iter([StreamMode::Values, StreamMode::Messages]),
    );
    let events: Vec<_> = stream.collect().await;

    let mut collected = String::new();
    let mut final_state = None;
    for event in events {
        match event {
            StreamEvent::Messages { chunk, metadata } => {
                assert_eq!(metadata.node, "generate");
                assert!(final_state.is_none(), "chunks must precede the snapshot");
                collected.push_str(&chunk.content);
            }
            StreamEvent::Values(state) => final_state = Some(state),
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(collected, "three word reply");

    let state = final_state.expect("stream ends with a Values snapshot");
    let messages = state.messages();
    assert_eq!(messages.last().unwrap().content(), "three word reply");
}

/// **Scenario**: Without Messages in the mode set, only the requested event
/// kinds are emitted.
#[tokio::test]
async fn unselected_modes_are_not_emitted() {
    let graph = model_graph("hi");
    let mut state = graph.initial_state();
    state.push_message(Message::human("go"));

    let stream = graph.stream(state, HashSet::from_iter([StreamMode::Updates]));
    let events: Vec<_> = stream.collect().await;
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        StreamEvent::Updates { node, .. } if node == "generate"
    ));
}
