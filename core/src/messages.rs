//! Common error messages used across Onto components.
//!
//! These constants keep messaging consistent between the union crate and its callers.

/// Error: the base graph handed to a union graph is already closed.
pub const ERR_CLOSED_BASE: &str = "Cannot build a union graph over a closed base graph";

/// Error: a closed graph handed to a union graph as a sub-graph.
pub const ERR_CLOSED_SUB_GRAPH: &str = "Cannot attach a closed graph as a sub-graph";

/// Error: a leaf graph was re-entered while another operation held it.
pub const ERR_GRAPH_BUSY: &str = "Graph is in use by another operation";
