//! Graph vertices.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable vertex: a string identity plus an opaque payload.
///
/// Identity is the id alone. Two nodes with the same id compare equal and hash
/// identically regardless of their payloads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node<N = ()> {
    id: String,
    data: N,
}

impl<N> Node<N> {
    /// Creates a node with the given id and payload.
    pub fn new(id: impl Into<String>, data: N) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// The node's identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's payload.
    pub fn data(&self) -> &N {
        &self.data
    }

    /// Consumes the node, returning its payload.
    pub fn into_data(self) -> N {
        self.data
    }
}

impl Node<()> {
    /// Creates a node without payload.
    pub fn bare(id: impl Into<String>) -> Self {
        Self::new(id, ())
    }
}

impl<N> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N> Eq for Node<N> {}

impl<N> Hash for Node<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<N> PartialOrd for Node<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Node<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<N> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
