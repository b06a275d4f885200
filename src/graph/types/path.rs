//! Walks through a graph: shortest paths and cycles.

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::Node;

/// An ordered walk: `nodes[i]` and `nodes[i + 1]` are joined by `edges[i]`.
///
/// A trivial path holds a single node and no edges. For a cycle the closing
/// edge is the last entry of `edges`, so `edges.len() == nodes.len()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Path<N = (), E = ()> {
    id: String,
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<N, E>>,
}

/// A closed walk returned by cycle detection.
pub type Cycle<N = (), E = ()> = Path<N, E>;

impl<N, E> Path<N, E> {
    pub(crate) fn new(nodes: Vec<Node<N>>, edges: Vec<Edge<N, E>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            nodes,
            edges,
        }
    }

    /// The path's (random) identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Visited nodes in walk order.
    pub fn nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// Traversed edges in walk order.
    pub fn edges(&self) -> &[Edge<N, E>] {
        &self.edges
    }

    /// Ids of the visited nodes in walk order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Ids of the traversed edges in walk order.
    pub fn edge_ids(&self) -> Vec<&str> {
        self.edges.iter().map(Edge::id).collect()
    }

    /// Number of edges traversed.
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// True for a single-node, zero-edge path.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// First node of the walk.
    pub fn start(&self) -> Option<&Node<N>> {
        self.nodes.first()
    }

    /// Last node of the walk.
    pub fn end(&self) -> Option<&Node<N>> {
        self.nodes.last()
    }
}
