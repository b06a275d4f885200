//! Graph edges and their directionality tag.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::node::Node;

/// Directionality tag carried by every edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// `start -> end`.
    Directed,
    /// `start -- end`.
    Undirected,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => f.write_str("directed"),
            EdgeKind::Undirected => f.write_str("undirected"),
        }
    }
}

/// An immutable edge between two nodes.
///
/// The edge owns copies of its endpoint nodes; graphs check at construction
/// that both endpoints are members of their node set. Identity is the id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge<N = (), E = ()> {
    id: String,
    kind: EdgeKind,
    start: Node<N>,
    end: Node<N>,
    data: E,
}

impl<N, E> Edge<N, E> {
    /// Creates an edge of the given kind.
    pub fn new(id: impl Into<String>, start: Node<N>, end: Node<N>, kind: EdgeKind, data: E) -> Self {
        Self {
            id: id.into(),
            kind,
            start,
            end,
            data,
        }
    }

    /// Creates a directed edge `start -> end`.
    pub fn directed(id: impl Into<String>, start: Node<N>, end: Node<N>, data: E) -> Self {
        Self::new(id, start, end, EdgeKind::Directed, data)
    }

    /// Creates an undirected edge `start -- end`.
    pub fn undirected(id: impl Into<String>, start: Node<N>, end: Node<N>, data: E) -> Self {
        Self::new(id, start, end, EdgeKind::Undirected, data)
    }

    /// The edge's identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Directionality tag.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Source (for directed edges) or first endpoint.
    pub fn start(&self) -> &Node<N> {
        &self.start
    }

    /// Target (for directed edges) or second endpoint.
    pub fn end(&self) -> &Node<N> {
        &self.end
    }

    /// The edge's payload.
    pub fn data(&self) -> &E {
        &self.data
    }

    /// The set `{start.id, end.id}`. Holds a single id for a self-loop.
    pub fn node_ids(&self) -> BTreeSet<&str> {
        [self.start.id(), self.end.id()].into_iter().collect()
    }

    /// Returns true if `node` is one of the edge's endpoints.
    pub fn is_endvertex(&self, node: &Node<N>) -> bool {
        self.is_incident_to(node.id())
    }

    /// Returns true if the node with id `node_id` is one of the endpoints.
    pub fn is_incident_to(&self, node_id: &str) -> bool {
        self.start.id() == node_id || self.end.id() == node_id
    }

    /// Returns true if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.start.id() == self.end.id()
    }

    /// The endpoint opposite to `node_id`, or `None` if the edge is not
    /// incident to it. A self-loop is its own opposite.
    pub fn opposite(&self, node_id: &str) -> Option<&Node<N>> {
        if self.start.id() == node_id {
            Some(&self.end)
        } else if self.end.id() == node_id {
            Some(&self.start)
        } else {
            None
        }
    }

    /// Returns true if this edge and `other` share at least one endpoint.
    pub fn is_adjacent_to(&self, other: &Edge<N, E>) -> bool {
        other.is_incident_to(self.start.id()) || other.is_incident_to(self.end.id())
    }
}

impl<N: Clone, E: Clone> Edge<N, E> {
    /// A fresh copy of this edge carrying a different kind tag.
    ///
    /// Used when converting between graph variants; shared edges are never
    /// re-tagged in place.
    pub fn with_kind(&self, kind: EdgeKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }
}

impl<N, E> PartialEq for Edge<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N, E> Eq for Edge<N, E> {}

impl<N, E> Hash for Edge<N, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<N, E> PartialOrd for Edge<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, E> Ord for Edge<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<N, E> fmt::Display for Edge<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            EdgeKind::Directed => "->",
            EdgeKind::Undirected => "--",
        };
        write!(f, "{}: {} {} {}", self.id, self.start, arrow, self.end)
    }
}
