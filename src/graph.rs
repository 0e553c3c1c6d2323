use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ops::Index;
use std::slice;

use log::{debug, trace};

use crate::error::{AddEdgeError, AddNodeError, IndexOutOfRangeError, UnknownNodeError};
use crate::index::EntityIndex;
use crate::registry::NodeRegistry;
use crate::{Direction, Edge, EdgePolicy, NodeIndex, Weight};

/// Number of nodes a graph admits unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Adjacency of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    /// Incoming and outgoing edges, indexed by `Direction`.
    edges: [Vec<Edge>; 2],
}

/// A graph of named nodes connected by weighted edges.
///
/// Nodes can only be added, never removed, so node indices stay valid for
/// the lifetime of the graph. Whether inserted edges are also stored in
/// reverse is decided by the graph's [`EdgePolicy`].
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    registry: NodeRegistry,
    nodes: Vec<Node>,
    policy: EdgePolicy,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("policy", &self.policy)
            .field("registry", &self.registry)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty directed graph admitting [`DEFAULT_CAPACITY`] nodes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new empty undirected graph admitting [`DEFAULT_CAPACITY`] nodes.
    pub fn new_undirected() -> Self {
        Self::with_policy(EdgePolicy::Undirected, DEFAULT_CAPACITY)
    }

    /// Create a new empty directed graph admitting at most `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(EdgePolicy::Directed, capacity)
    }

    /// Create a new empty graph with the given edge policy and node capacity.
    pub fn with_policy(policy: EdgePolicy, capacity: usize) -> Self {
        Self {
            registry: NodeRegistry::new(capacity),
            nodes: Vec::new(),
            policy,
        }
    }

    /// Add a node with a unique name and return its index.
    ///
    /// Indices are assigned sequentially from zero. On error the graph is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use namedgraph::{AddNodeError, Graph, NodeIndex};
    /// # use namedgraph::index::EntityIndex;
    /// let mut graph = Graph::with_capacity(2);
    ///
    /// assert_eq!(graph.add_node("a"), Ok(NodeIndex::new(0)));
    /// assert_eq!(graph.add_node("a"), Err(AddNodeError::DuplicateNode("a".into())));
    /// assert_eq!(graph.add_node("b"), Ok(NodeIndex::new(1)));
    /// assert_eq!(graph.add_node("c"), Err(AddNodeError::CapacityExceeded { capacity: 2 }));
    /// ```
    pub fn add_node(&mut self, name: &str) -> Result<NodeIndex, AddNodeError> {
        let index = self.registry.register(name).map_err(|error| {
            debug!("Rejected node '{name}': {error}");
            error
        })?;

        self.nodes.push(Node::default());
        debug!("Added node: name={name}, index={index}");
        Ok(index)
    }

    /// Add an edge between two nodes given by name.
    ///
    /// An undirected graph also stores the reversed edge. On error no edge
    /// is stored.
    ///
    /// # Example
    ///
    /// ```
    /// # use namedgraph::{AddEdgeError, Edge, Graph};
    /// let mut graph = Graph::new_undirected();
    /// let p = graph.add_node("P").unwrap();
    /// let q = graph.add_node("Q").unwrap();
    ///
    /// graph.add_edge("P", "Q", 7).unwrap();
    /// assert!(graph.outgoing_edges(p).unwrap().eq([Edge::new(p, q, 7)]));
    /// assert!(graph.outgoing_edges(q).unwrap().eq([Edge::new(q, p, 7)]));
    ///
    /// assert_eq!(
    ///     graph.add_edge("P", "R", 1),
    ///     Err(AddEdgeError::UnknownNode("R".into()))
    /// );
    /// ```
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Weight,
    ) -> Result<(), AddEdgeError> {
        let resolved = self
            .node_index(source)
            .and_then(|source| Ok((source, self.node_index(target)?)));

        let (source, target) = resolved.map_err(|error| {
            debug!("Rejected edge '{source}' -> '{target}': {error}");
            AddEdgeError::from(error)
        })?;

        self.store_edge(Edge::new(source, target, weight));
        Ok(())
    }

    /// Add an edge whose endpoints are given by index.
    ///
    /// Both endpoints are checked before anything is stored, so the call is
    /// atomic under either edge policy.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<(), AddEdgeError> {
        for direction in Direction::ALL {
            if let Err(error) = self.check_node(edge.endpoint(direction)) {
                debug!("Rejected edge {edge}: {error}");
                return Err(error.into());
            }
        }

        self.store_edge(edge);
        Ok(())
    }

    /// Store `edge` and whatever else the policy derives from it.
    ///
    /// Both endpoints of `edge` must be valid.
    fn store_edge(&mut self, edge: Edge) {
        debug!("Adding edge: {edge}, policy={}", self.policy);

        for stored in self.policy.expand(edge) {
            for direction in Direction::ALL {
                let node = stored.endpoint(direction);
                self.nodes[node.index()].edges[direction.index()].push(stored);
            }
            trace!("Stored adjacency entry {stored}");
        }
    }

    fn check_node(&self, node: NodeIndex) -> Result<(), IndexOutOfRangeError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(IndexOutOfRangeError {
                index: node,
                node_count: self.node_count(),
            })
        }
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum number of nodes the graph admits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.registry.capacity()
    }

    #[inline]
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Check whether the graph has a node with a given index.
    #[inline]
    pub fn has_node(&self, node: NodeIndex) -> bool {
        self.registry.contains(node)
    }

    /// Check whether a node with the given name has been added.
    #[inline]
    pub fn contains_node(&self, name: &str) -> bool {
        self.registry.contains_name(name)
    }

    /// The name of the node with a given index.
    pub fn node_name(&self, node: NodeIndex) -> Result<&str, IndexOutOfRangeError> {
        self.registry.name_of(node).ok_or(IndexOutOfRangeError {
            index: node,
            node_count: self.node_count(),
        })
    }

    /// The index of the node with a given name.
    pub fn node_index(&self, name: &str) -> Result<NodeIndex, UnknownNodeError> {
        self.registry
            .index_of(name)
            .ok_or_else(|| UnknownNodeError(name.to_owned()))
    }

    /// Iterator over the edges that are connected to a node in a given direction.
    ///
    /// Edges are yielded in insertion order. The iterator borrows the graph;
    /// calling this again yields the same edges unless the graph was modified
    /// in between.
    pub fn node_edges(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> Result<NodeEdges<'_>, IndexOutOfRangeError> {
        self.check_node(node)?;
        Ok(NodeEdges(self.nodes[node.index()].edges[direction.index()].iter()))
    }

    /// Iterator over the edges whose source is `node`.
    #[inline]
    pub fn outgoing_edges(&self, node: NodeIndex) -> Result<NodeEdges<'_>, IndexOutOfRangeError> {
        self.node_edges(node, Direction::Outgoing)
    }

    /// Iterator over the edges whose target is `node`.
    #[inline]
    pub fn incoming_edges(&self, node: NodeIndex) -> Result<NodeEdges<'_>, IndexOutOfRangeError> {
        self.node_edges(node, Direction::Incoming)
    }

    /// Iterator over the nodes at the far end of a node's edges.
    ///
    /// A node appears once per connecting edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use namedgraph::{Direction, Graph};
    /// let mut graph = Graph::new();
    /// let a = graph.add_node("a").unwrap();
    /// let b = graph.add_node("b").unwrap();
    /// let c = graph.add_node("c").unwrap();
    /// graph.add_edge("a", "b", 1).unwrap();
    /// graph.add_edge("a", "c", 2).unwrap();
    ///
    /// assert!(graph.neighbours(a, Direction::Outgoing).unwrap().eq([b, c]));
    /// assert!(graph.neighbours(c, Direction::Incoming).unwrap().eq([a]));
    /// ```
    pub fn neighbours(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> Result<impl Iterator<Item = NodeIndex> + '_, IndexOutOfRangeError> {
        let edges = self.node_edges(node, direction)?;
        Ok(edges.map(move |edge| edge.endpoint(direction.reverse())))
    }
}

/// Panics if the index is out of range.
impl Index<NodeIndex> for Graph {
    type Output = str;

    fn index(&self, node: NodeIndex) -> &str {
        match self.registry.name_of(node) {
            Some(name) => name,
            None => panic!(
                "node index {node} out of range for a graph with {} nodes",
                self.node_count()
            ),
        }
    }
}

/// Panics if no node has the given name.
impl Index<&str> for Graph {
    type Output = NodeIndex;

    fn index(&self, name: &str) -> &NodeIndex {
        match self.registry.index_ref(name) {
            Some(index) => index,
            None => panic!("unknown node '{name}'"),
        }
    }
}

/// Iterator created by [`Graph::node_edges`].
#[derive(Debug, Clone)]
pub struct NodeEdges<'a>(slice::Iter<'a, Edge>);

impl<'a> Iterator for NodeEdges<'a> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for NodeEdges<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().copied()
    }
}

impl<'a> ExactSizeIterator for NodeEdges<'a> {}
impl<'a> FusedIterator for NodeEdges<'a> {}
