//! Demo workflows for the `graphflow` binary.
//!
//! Each demo builds one of the corpus workflows — a single model turn, a
//! linear pipeline with mixed merge policies, keyword intent routing, and a
//! turn-bounded chatbot — and exposes the graph builder so tests can drive
//! it with a mock client.

pub mod client;
pub mod demos;

pub use client::build_llm;
pub use demos::{basic_graph, chat_graph, pipeline_graph, print_conversation, route_graph};

#[cfg(test)]
mod tests;
