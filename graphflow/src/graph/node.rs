//! Node protocol: one unit of work, full state in, partial state out.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::graph::RunContext;
use crate::state::{State, StateUpdate};

/// One unit of work in the workflow graph.
///
/// A node reads the full current state and returns a partial update; the
/// runner merges that update under the state's schema before routing.
/// Ordinary business outcomes (no user message, nothing to do) are encoded
/// in returned fields — e.g. a `next_step` flag for a downstream router —
/// never raised as errors. A node may block on an external system (model,
/// search API); the runner awaits it and does nothing else meanwhile.
///
/// **Interaction**: Registered by name in `WorkflowGraph::add_node`; invoked
/// by `CompiledGraph` with the post-merge state of the previous step.
#[async_trait]
pub trait Node: Send + Sync {
    /// Runs one step against the current state.
    async fn run(&self, state: &State) -> Result<StateUpdate, NodeError>;

    /// Streaming-aware variant; the default delegates to [`run`](Node::run).
    /// Nodes that emit incremental output (e.g. a model node forwarding
    /// token chunks) override this and use `ctx.stream_tx`.
    async fn run_with_context(
        &self,
        state: &State,
        _ctx: &RunContext,
    ) -> Result<StateUpdate, NodeError> {
        self.run(state).await
    }
}

/// Adapter turning a plain closure into a [`Node`], for inline demo and test
/// nodes that need no external calls.
pub struct FnNode<F> {
    f: F,
}

impl<F> FnNode<F>
where
    F: Fn(&State) -> Result<StateUpdate, NodeError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> Node for FnNode<F>
where
    F: Fn(&State) -> Result<StateUpdate, NodeError> + Send + Sync,
{
    async fn run(&self, state: &State) -> Result<StateUpdate, NodeError> {
        (self.f)(state)
    }
}
