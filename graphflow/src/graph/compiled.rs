//! Compiled workflow graph: immutable, supports invoke and stream.
//!
//! Built by `WorkflowGraph::compile`. Holds the node registry and the edge
//! table; executes nodes sequentially, merging each partial update into the
//! running state under the schema's per-field policies, and routes on the
//! post-merge state until `END` is reached.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::GraphError;
use crate::graph::logging;
use crate::graph::node::Node;
use crate::graph::router::Router;
use crate::graph::run_context::RunContext;
use crate::graph::workflow_graph::END;
use crate::state::{State, StateSchema};
use crate::stream::{StreamEvent, StreamMode};

/// Outgoing edge for one node: a single destination, or a router plus a
/// key → destination mapping.
#[derive(Clone)]
pub(super) enum Edge {
    Direct(String),
    Conditional {
        router: Router,
        targets: HashMap<String, String>,
    },
}

/// Compiled graph: immutable structure, one sequential execution path per
/// invocation.
///
/// Created by `WorkflowGraph::compile()`. Runs from the entry node; after
/// each node the merged state is consulted for routing. The runner places no
/// implicit bound on cycles — callers wanting a safety bound encode a counter
/// field in state and have the router check it.
#[derive(Clone)]
pub struct CompiledGraph {
    pub(super) schema: Arc<StateSchema>,
    pub(super) nodes: HashMap<String, Arc<dyn Node>>,
    pub(super) entry: String,
    pub(super) edges: HashMap<String, Edge>,
}

impl CompiledGraph {
    /// Shared run loop used by invoke() and stream(): steps through nodes
    /// until END, merging and routing after every step.
    async fn run_loop(
        &self,
        state: &mut State,
        run_ctx: Option<&RunContext>,
    ) -> Result<(), GraphError> {
        let mut current = self.entry.clone();
        loop {
            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| GraphError::UnknownNode(current.clone()))?;

            logging::log_node_start(&current);
            let update = if let Some(ctx) = run_ctx {
                let ctx = RunContext {
                    node: current.clone(),
                    ..ctx.clone()
                };
                node.run_with_context(state, &ctx).await
            } else {
                node.run(state).await
            }
            .map_err(|e| GraphError::Node {
                node: current.clone(),
                source: e,
            })?;

            state.merge(update);
            logging::log_state_update(&current);

            if let Some(ctx) = run_ctx {
                if let Some(tx) = &ctx.stream_tx {
                    if ctx.stream_mode.contains(&StreamMode::Values) {
                        let _ = tx.send(StreamEvent::Values(state.clone())).await;
                    }
                    if ctx.stream_mode.contains(&StreamMode::Updates) {
                        let _ = tx
                            .send(StreamEvent::Updates {
                                node: current.clone(),
                                state: state.clone(),
                            })
                            .await;
                    }
                }
            }

            // Routing consults the post-merge state.
            let next = match self.edges.get(&current) {
                Some(Edge::Direct(to)) => to.clone(),
                Some(Edge::Conditional { router, targets }) => {
                    let key = router(state);
                    match targets.get(&key) {
                        Some(to) => to.clone(),
                        None => {
                            return Err(GraphError::UnresolvedRoute {
                                node: current,
                                key,
                            })
                        }
                    }
                }
                // Compile validation rejects dead ends; defensive only.
                None => return Err(GraphError::UnknownNode(current)),
            };

            if next == END {
                return Ok(());
            }
            current = next;
        }
    }

    /// Runs the graph to completion and returns the final state.
    ///
    /// The algorithm per step: look up the node, invoke it with the current
    /// state, merge the returned partial update under the schema, then
    /// resolve the next node from the edge table (conditional routers see
    /// the post-merge state). A node error aborts the run and surfaces with
    /// the failing node name attached; no partial state is returned.
    pub async fn invoke(&self, state: State) -> Result<State, GraphError> {
        let mut state = state;
        logging::log_graph_start();
        match self.run_loop(&mut state, None).await {
            Ok(()) => {
                logging::log_graph_complete();
                Ok(state)
            }
            Err(e) => {
                logging::log_graph_error(&e);
                Err(e)
            }
        }
    }

    /// Streams graph execution, emitting events via a channel-backed stream.
    ///
    /// `Values` emits the full state after each merge, `Updates` pairs it
    /// with the node name, and `Messages` lets streaming-aware nodes forward
    /// model token chunks. The stream ends when the run terminates; an
    /// erroring run simply closes the stream early (use [`invoke`] when the
    /// error itself is needed).
    pub fn stream(
        &self,
        state: State,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let mode_set: HashSet<StreamMode> = stream_mode.into();

        tokio::spawn(async move {
            let mut state = state;
            let run_ctx = RunContext {
                node: graph.entry.clone(),
                stream_tx: Some(tx),
                stream_mode: mode_set,
            };
            if let Err(e) = graph.run_loop(&mut state, Some(&run_ctx)).await {
                logging::log_graph_error(&e);
            }
        });

        ReceiverStream::new(rx)
    }
}
