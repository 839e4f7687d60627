//! Workflow graph: nodes + edges (unconditional and conditional), compile and
//! invoke.
//!
//! Build with `WorkflowGraph`: add nodes, set the entry point, wire edges
//! (using `END` for graph exit and routers for conditional branching), then
//! `compile()` to get an executable `CompiledGraph`.

mod compile_error;
mod compiled;
mod logging;
mod node;
mod router;
mod run_context;
mod workflow_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledGraph;
pub use node::{FnNode, Node};
pub use router::{router, Router};
pub use run_context::RunContext;
pub use workflow_graph::{WorkflowGraph, END};
