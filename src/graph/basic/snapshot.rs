//! Serde interop for graphs.
//!
//! A [`GraphSnapshot`] lists a graph's id, payload, nodes and edges in id
//! order, so serializing the same graph always yields the same output.
//! Converting a snapshot back into a graph goes through the normal
//! constructor and re-validates every construction invariant.

use serde::{Deserialize, Serialize};

use super::graph::{EdgeType, Graph};
use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, Node};

/// Plain-data view of a graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphSnapshot<N = (), E = (), D = ()> {
    /// Graph id.
    pub id: String,
    /// Graph payload.
    pub data: D,
    /// Nodes in id order.
    pub nodes: Vec<Node<N>>,
    /// Edges in id order.
    pub edges: Vec<Edge<N, E>>,
}

impl<N: Clone, E: Clone, D: Clone, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Captures the graph as plain data.
    pub fn to_snapshot(&self) -> GraphSnapshot<N, E, D> {
        GraphSnapshot {
            id: self.id().to_owned(),
            data: self.data().clone(),
            nodes: self.nodes().cloned().collect(),
            edges: self.edges().cloned().collect(),
        }
    }
}

impl<N, E, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Rebuilds a graph from a snapshot.
    ///
    /// # Errors
    /// Any construction error [`Graph::new`] reports.
    pub fn from_snapshot(snapshot: GraphSnapshot<N, E, D>) -> Result<Self> {
        Self::new(snapshot.id, snapshot.data, snapshot.nodes, snapshot.edges)
    }
}

impl<N, E, D, Ty: EdgeType> TryFrom<GraphSnapshot<N, E, D>> for Graph<N, E, D, Ty> {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot<N, E, D>) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}
