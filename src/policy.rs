use std::fmt;
use std::iter;

use crate::Edge;

/// How inserted edges are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Every edge is stored once, as inserted.
    #[default]
    Directed,
    /// Every edge is stored together with its reversed copy.
    ///
    /// A self-loop is therefore stored twice.
    Undirected,
}

impl EdgePolicy {
    /// The edges that get stored when `edge` is inserted, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use namedgraph::{Edge, EdgePolicy, NodeIndex};
    /// # use namedgraph::index::EntityIndex;
    /// let edge = Edge::new(NodeIndex::new(0), NodeIndex::new(1), 7);
    ///
    /// assert!(EdgePolicy::Directed.expand(edge).eq([edge]));
    /// assert!(EdgePolicy::Undirected.expand(edge).eq([edge, edge.reversed()]));
    /// ```
    pub fn expand(self, edge: Edge) -> impl Iterator<Item = Edge> {
        let mirrored = match self {
            EdgePolicy::Directed => None,
            EdgePolicy::Undirected => Some(edge.reversed()),
        };

        iter::once(edge).chain(mirrored)
    }

    #[inline]
    pub fn is_directed(self) -> bool {
        self == EdgePolicy::Directed
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgePolicy::Directed => f.write_str("directed"),
            EdgePolicy::Undirected => f.write_str("undirected"),
        }
    }
}
