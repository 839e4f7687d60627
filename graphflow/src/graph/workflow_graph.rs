//! Workflow graph builder: nodes + explicit edges, conditional routing.
//!
//! Add nodes with `add_node`, set the entry with `set_entry_point`, wire the
//! flow with `add_edge(from, to)` (use `END` for graph exit) and
//! `add_conditional_edges(from, router, targets)`, then `compile` to get a
//! `CompiledGraph`. Cycles are legal: a router may send execution back to an
//! already-visited node; callers bound loops with a counter field in state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledGraph, Edge};
use crate::graph::node::Node;
use crate::graph::router::Router;
use crate::state::{State, StateSchema};

/// Sentinel for graph exit: use as destination in `add_edge` or as a value in
/// a conditional edge's target mapping.
pub const END: &str = "__end__";

enum EdgeDecl {
    Direct(String),
    Conditional {
        router: Router,
        targets: HashMap<String, String>,
    },
}

/// Workflow graph under construction: named nodes, one entry point, and an
/// edge table with unconditional and conditional entries.
///
/// **Interaction**: Accepts `Arc<dyn Node>` and [`Router`] functions;
/// produces [`CompiledGraph`]. The state schema given at construction is
/// carried into every state the compiled graph creates.
pub struct WorkflowGraph {
    schema: Arc<StateSchema>,
    nodes: HashMap<String, Arc<dyn Node>>,
    entry: Option<String>,
    // Declarations in call order; duplicate sources are rejected at compile.
    edges: Vec<(String, EdgeDecl)>,
}

impl WorkflowGraph {
    /// Creates an empty graph over the given state schema.
    pub fn new(schema: StateSchema) -> Self {
        Self {
            schema: Arc::new(schema),
            nodes: HashMap::new(),
            entry: None,
            edges: Vec::new(),
        }
    }

    /// Adds a node; the name must be unique. Replaces if the same name is
    /// registered again.
    pub fn add_node(&mut self, name: impl Into<String>, node: Arc<dyn Node>) -> &mut Self {
        self.nodes.insert(name.into(), node);
        self
    }

    /// Sets the node execution starts at.
    pub fn set_entry_point(&mut self, name: impl Into<String>) -> &mut Self {
        self.entry = Some(name.into());
        self
    }

    /// Adds an unconditional edge from `from` to `to` (`END` to exit).
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges
            .push((from.into(), EdgeDecl::Direct(to.into())));
        self
    }

    /// Adds a conditional edge set: after `from` runs, `router` is invoked
    /// with the post-merge state and its key selects the destination from
    /// `targets` (node name or `END`).
    pub fn add_conditional_edges(
        &mut self,
        from: impl Into<String>,
        router: Router,
        targets: HashMap<String, String>,
    ) -> &mut Self {
        self.edges
            .push((from.into(), EdgeDecl::Conditional { router, targets }));
        self
    }

    /// Builds the executable graph.
    ///
    /// Validates eagerly: the entry point is set and registered, every edge
    /// source and destination (except `END`) is registered, each node has
    /// exactly one outgoing edge declaration, and no node is a dead end.
    /// Cycles pass validation; termination is the caller's contract.
    pub fn compile(self) -> Result<CompiledGraph, CompilationError> {
        let entry = self.entry.ok_or(CompilationError::MissingEntryPoint)?;
        if !self.nodes.contains_key(&entry) {
            return Err(CompilationError::NodeNotFound(entry));
        }

        let mut edges: HashMap<String, Edge> = HashMap::new();
        for (from, decl) in self.edges {
            if !self.nodes.contains_key(&from) {
                return Err(CompilationError::NodeNotFound(from));
            }
            if edges.contains_key(&from) {
                return Err(CompilationError::ConflictingEdges(from));
            }
            let edge = match decl {
                EdgeDecl::Direct(to) => {
                    if to != END && !self.nodes.contains_key(&to) {
                        return Err(CompilationError::NodeNotFound(to));
                    }
                    Edge::Direct(to)
                }
                EdgeDecl::Conditional { router, targets } => {
                    for to in targets.values() {
                        if to != END && !self.nodes.contains_key(to) {
                            return Err(CompilationError::NodeNotFound(to.clone()));
                        }
                    }
                    Edge::Conditional { router, targets }
                }
            };
            edges.insert(from, edge);
        }

        for name in self.nodes.keys() {
            if !edges.contains_key(name) {
                return Err(CompilationError::DeadEnd(name.clone()));
            }
        }

        Ok(CompiledGraph {
            schema: self.schema,
            nodes: self.nodes,
            entry,
            edges,
        })
    }
}

impl CompiledGraph {
    /// Empty state bound to the graph's schema, for callers building the
    /// initial state of a run.
    pub fn initial_state(&self) -> State {
        State::new(self.schema.clone())
    }
}
