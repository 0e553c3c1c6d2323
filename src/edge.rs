use std::fmt;

use crate::{Direction, NodeIndex, Weight};

/// A directed, weighted connection between two nodes.
///
/// Edges are plain values: the graph stores a copy in the outgoing list of the
/// source and another in the incoming list of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The nodes that the edge is connected to.
    ///
    /// The first component is the target and the second component the source of the edge. This
    /// is so that the array can be indexed by `Direction`.
    nodes: [NodeIndex; 2],

    weight: Weight,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    #[inline]
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Self {
            nodes: [target, source],
            weight,
        }
    }

    #[inline]
    pub fn source(&self) -> NodeIndex {
        self.nodes[Direction::Outgoing.index()]
    }

    #[inline]
    pub fn target(&self) -> NodeIndex {
        self.nodes[Direction::Incoming.index()]
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The node at one end of the edge.
    ///
    /// An edge is `Incoming` at its target and `Outgoing` at its source, so
    /// `endpoint(Direction::Incoming)` is the target.
    ///
    /// # Example
    ///
    /// ```
    /// # use namedgraph::{Direction, Edge, NodeIndex};
    /// # use namedgraph::index::EntityIndex;
    /// let edge = Edge::new(NodeIndex::new(0), NodeIndex::new(1), 4);
    /// assert_eq!(edge.endpoint(Direction::Outgoing), NodeIndex::new(0));
    /// assert_eq!(edge.endpoint(Direction::Incoming), NodeIndex::new(1));
    /// ```
    #[inline]
    pub fn endpoint(&self, direction: Direction) -> NodeIndex {
        self.nodes[direction.index()]
    }

    /// The same edge running the other way, with the same weight.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.target(), self.source(), self.weight)
    }

    /// Whether the edge starts and ends at the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.source() == self.target()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source(), self.target(), self.weight)
    }
}

impl From<(NodeIndex, NodeIndex, Weight)> for Edge {
    fn from((source, target, weight): (NodeIndex, NodeIndex, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::EntityIndex;

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = Edge::new(NodeIndex::new(2), NodeIndex::new(5), -3);
        let back = edge.reversed();

        assert_eq!(back.source(), NodeIndex::new(5));
        assert_eq!(back.target(), NodeIndex::new(2));
        assert_eq!(back.weight(), -3);
        assert_eq!(back.reversed(), edge);
    }

    #[test]
    fn loops() {
        let n = NodeIndex::new(1);
        assert!(Edge::new(n, n, 0).is_loop());
        assert_eq!(Edge::new(n, n, 0).reversed(), Edge::new(n, n, 0));
        assert!(!Edge::new(n, NodeIndex::new(0), 0).is_loop());
    }

    #[test]
    fn display() {
        let edge = Edge::from((NodeIndex::new(0), NodeIndex::new(1), 10));
        assert_eq!(edge.to_string(), "0 -> 1 (10)");
    }
}
