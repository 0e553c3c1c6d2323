//! Python bindings, enabled with the `pyo3` feature.
use pyo3::exceptions::{PyIndexError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::error::{AddEdgeError, AddNodeError, IndexOutOfRangeError, UnknownNodeError};
use crate::index::EntityIndex;
use crate::{Direction, EdgePolicy, Graph, NodeIndex, Weight, DEFAULT_CAPACITY};

impl From<AddNodeError> for PyErr {
    fn from(error: AddNodeError) -> Self {
        PyValueError::new_err(error.to_string())
    }
}

impl From<AddEdgeError> for PyErr {
    fn from(error: AddEdgeError) -> Self {
        match error {
            AddEdgeError::UnknownNode(_) => PyKeyError::new_err(error.to_string()),
            AddEdgeError::InvalidIndex { .. } => PyIndexError::new_err(error.to_string()),
        }
    }
}

impl From<UnknownNodeError> for PyErr {
    fn from(error: UnknownNodeError) -> Self {
        PyKeyError::new_err(error.to_string())
    }
}

impl From<IndexOutOfRangeError> for PyErr {
    fn from(error: IndexOutOfRangeError) -> Self {
        PyIndexError::new_err(error.to_string())
    }
}

/// Python-facing wrapper around [`Graph`].
#[pyclass(name = "Graph")]
pub struct PyGraph {
    graph: Graph,
}

impl PyGraph {
    fn node(index: usize) -> PyResult<NodeIndex> {
        NodeIndex::try_new(index)
            .ok_or_else(|| PyIndexError::new_err(format!("node index {index} out of range")))
    }

    fn edges(&self, index: usize, direction: Direction) -> PyResult<Vec<(usize, usize, Weight)>> {
        let edges = self.graph.node_edges(Self::node(index)?, direction)?;
        Ok(edges
            .map(|edge| (edge.source().index(), edge.target().index(), edge.weight()))
            .collect())
    }
}

#[pymethods]
impl PyGraph {
    #[new]
    #[pyo3(signature = (capacity = DEFAULT_CAPACITY, undirected = false))]
    fn new(capacity: usize, undirected: bool) -> Self {
        let policy = if undirected {
            EdgePolicy::Undirected
        } else {
            EdgePolicy::Directed
        };

        Self {
            graph: Graph::with_policy(policy, capacity),
        }
    }

    fn add_node(&mut self, name: &str) -> PyResult<usize> {
        Ok(self.graph.add_node(name)?.index())
    }

    fn add_edge(&mut self, source: &str, target: &str, weight: Weight) -> PyResult<()> {
        Ok(self.graph.add_edge(source, target, weight)?)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_name(&self, index: usize) -> PyResult<String> {
        Ok(self.graph.node_name(Self::node(index)?)?.to_owned())
    }

    fn node_index(&self, name: &str) -> PyResult<usize> {
        Ok(self.graph.node_index(name)?.index())
    }

    fn outgoing_edges(&self, index: usize) -> PyResult<Vec<(usize, usize, Weight)>> {
        self.edges(index, Direction::Outgoing)
    }

    fn incoming_edges(&self, index: usize) -> PyResult<Vec<(usize, usize, Weight)>> {
        self.edges(index, Direction::Incoming)
    }

    fn __len__(&self) -> usize {
        self.graph.node_count()
    }
}

#[pymodule]
fn namedgraph(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    Ok(())
}
