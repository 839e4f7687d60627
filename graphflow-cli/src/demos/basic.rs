//! Basic demo: one model node, unconditional edge to END.

use std::sync::Arc;

use graphflow::{
    CompilationError, CompiledGraph, LlmClient, ModelNode, StateSchema, WorkflowGraph, END,
};

/// Smallest useful graph: the model answers the caller's message once.
pub fn basic_graph(llm: Box<dyn LlmClient>) -> Result<CompiledGraph, CompilationError> {
    let mut graph = WorkflowGraph::new(StateSchema::messages_only());
    graph.add_node("agent", Arc::new(ModelNode::new(llm)));
    graph.set_entry_point("agent");
    graph.add_edge("agent", END);
    graph.compile()
}
