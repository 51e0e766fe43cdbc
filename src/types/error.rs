//! Error types for the dualgraph library.

use thiserror::Error;

/// All errors that can occur in the dualgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this identifier already exists.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// No vertex with this identifier exists.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// The edge to remove does not exist.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Matrix position outside the current vertex count.
    #[error("Vertex position {index} out of range (vertex count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external renderer failed or could not be started.
    #[error("Render error: {0}")]
    Render(String),

    /// Malformed driver input (vertex or edge list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub(crate) fn unknown(id: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex(id.to_string())
    }

    pub(crate) fn duplicate(id: &impl std::fmt::Display) -> Self {
        Self::DuplicateVertex(id.to_string())
    }
}

/// Convenience result type for dualgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
