//! Errors raised by [`GraphStore`](crate::repr::GraphStore) operations.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error raised by a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index outside of `0..number_of_nodes` was passed.
    #[error("vertex {node} is out of range for a graph with {number_of_nodes} vertices")]
    NodeOutOfRange {
        /// The offending index.
        node: Node,
        /// Number of vertices at the time of the call.
        number_of_nodes: NumNodes,
    },
}
