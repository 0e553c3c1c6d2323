//! A small graph container with named nodes and weighted edges.
//!
//! Nodes are registered by a unique name and receive a dense [`NodeIndex`] in
//! registration order. Every node keeps an ordered list of incoming and of
//! outgoing [`Edge`]s, which is the adjacency layer that path finding and
//! similar algorithms are built on top of.
//!
//! The behaviour of edge insertion is fixed at construction by an
//! [`EdgePolicy`]: a directed graph stores each edge as inserted, an
//! undirected graph additionally stores the reversed edge.
//!
//! # Example
//!
//! ```
//! use namedgraph::{Edge, Graph, NodeIndex};
//! use namedgraph::index::EntityIndex;
//!
//! let mut graph = Graph::with_capacity(3);
//! let x = graph.add_node("X").unwrap();
//! let y = graph.add_node("Y").unwrap();
//! graph.add_node("Z").unwrap();
//! assert!(graph.add_node("W").is_err());
//!
//! graph.add_edge("X", "Y", 10).unwrap();
//! assert!(graph.outgoing_edges(x).unwrap().eq([Edge::new(x, y, 10)]));
//! assert!(graph.incoming_edges(y).unwrap().eq([Edge::new(x, y, 10)]));
//! assert_eq!(graph.outgoing_edges(y).unwrap().len(), 0);
//! assert_eq!(&graph[NodeIndex::new(2)], "Z");
//! ```
#[macro_use]
pub mod index;

pub mod edge;
pub mod error;
pub mod graph;
pub mod policy;
pub mod registry;

#[cfg(feature = "pyo3")]
pub mod python;

pub use crate::edge::Edge;
pub use crate::error::{AddEdgeError, AddNodeError, IndexOutOfRangeError, UnknownNodeError};
pub use crate::graph::{Graph, NodeEdges, DEFAULT_CAPACITY};
pub use crate::policy::EdgePolicy;

/// Cost associated with an edge.
///
/// Weights are opaque to the graph: negative values are stored as given.
pub type Weight = i64;

/// Index of a node within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeIndex(u32);

entity_impl!(NodeIndex, u32);

/// The end of an edge as seen from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges that end at the node.
    Incoming = 0,
    /// Edges that start at the node.
    Outgoing = 1,
}

impl Direction {
    /// Both directions, in index order.
    pub const ALL: [Direction; 2] = [Direction::Incoming, Direction::Outgoing];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Incoming => Direction::Outgoing,
            Direction::Outgoing => Direction::Incoming,
        }
    }
}
