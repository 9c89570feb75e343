//! Common error types for Onto.

use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The graph (or a composite it belongs to) has been closed.
    #[error("Graph is closed")]
    Closed,

    /// The graph was assembled from parts it cannot work with.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller broke an argument contract.
    #[error("Contract violation: {0}")]
    Contract(String),

    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GraphError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        GraphError::Configuration(msg.into())
    }

    pub fn contract(msg: impl Into<String>) -> Self {
        GraphError::Contract(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        GraphError::Storage(msg.into())
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while loading [`crate::ModelControls`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid model controls: {0}")]
    Parse(#[from] serde_json::Error),
}
