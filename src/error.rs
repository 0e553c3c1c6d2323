//! Errors returned by fallible graph operations.
use thiserror::Error;

use crate::NodeIndex;

/// Error returned by [`Graph::add_node`](crate::Graph::add_node).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddNodeError {
    #[error("node '{0}' is already present in the graph")]
    DuplicateNode(String),
    #[error("graph has reached its capacity of {capacity} nodes")]
    CapacityExceeded { capacity: usize },
}

/// Error returned by [`Graph::add_edge`](crate::Graph::add_edge) and
/// [`Graph::insert_edge`](crate::Graph::insert_edge).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddEdgeError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),
    #[error("node index {index} is not valid for a graph with {node_count} nodes")]
    InvalidIndex { index: NodeIndex, node_count: usize },
}

/// Error returned when looking up a node name that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node '{0}'")]
pub struct UnknownNodeError(pub String);

/// Error returned when a node index is outside `0..node_count`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node index {index} out of range for a graph with {node_count} nodes")]
pub struct IndexOutOfRangeError {
    pub index: NodeIndex,
    pub node_count: usize,
}

impl From<UnknownNodeError> for AddEdgeError {
    fn from(error: UnknownNodeError) -> Self {
        AddEdgeError::UnknownNode(error.0)
    }
}

impl From<IndexOutOfRangeError> for AddEdgeError {
    fn from(error: IndexOutOfRangeError) -> Self {
        AddEdgeError::InvalidIndex {
            index: error.index,
            node_count: error.node_count,
        }
    }
}
