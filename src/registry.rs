//! Bidirectional mapping between node names and node indices.
use std::collections::HashMap;

use crate::error::AddNodeError;
use crate::index::EntityIndex;
use crate::NodeIndex;

/// Arena of node names with a reverse lookup table.
///
/// Indices are handed out densely in registration order and are never
/// reused. `names` and `indices` are kept as inverse maps of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRegistry {
    names: Vec<String>,
    indices: HashMap<String, NodeIndex>,
    capacity: usize,
}

impl NodeRegistry {
    /// Create an empty registry that admits at most `capacity` names.
    pub fn new(capacity: usize) -> Self {
        Self {
            names: Vec::new(),
            indices: HashMap::new(),
            capacity,
        }
    }

    /// Register `name` under the next free index.
    ///
    /// Leaves the registry untouched on error.
    pub fn register(&mut self, name: &str) -> Result<NodeIndex, AddNodeError> {
        if self.indices.contains_key(name) {
            return Err(AddNodeError::DuplicateNode(name.to_owned()));
        }

        let capacity_error = AddNodeError::CapacityExceeded {
            capacity: self.capacity,
        };

        if self.names.len() >= self.capacity {
            return Err(capacity_error);
        }

        let index = NodeIndex::try_new(self.names.len()).ok_or(capacity_error)?;
        self.names.push(name.to_owned());
        self.indices.insert(name.to_owned(), index);
        Ok(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    #[inline]
    pub fn name_of(&self, index: NodeIndex) -> Option<&str> {
        self.names.get(index.index()).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, index: NodeIndex) -> bool {
        index.index() < self.names.len()
    }

    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of names the registry admits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrow the lookup slot for `name`, used by `Index<&str>`.
    pub(crate) fn index_ref(&self, name: &str) -> Option<&NodeIndex> {
        self.indices.get(name)
    }
}
