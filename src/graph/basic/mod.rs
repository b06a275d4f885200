//! Core graph representations.
//!
//! [`Graph`] is the id-keyed node/edge store with its adjacency index, typed
//! by an [`EdgeType`] marker. [`DiGraph`] layers the frozen reachability
//! index on top of a directed graph.

mod digraph;
mod graph;
mod invariants;
mod snapshot;

pub use digraph::DiGraph;
pub use graph::{
    AdjacencyIndex, Directed, Direction, EdgeType, Graph, Mixed, Undirected, UndirectedGraph,
};
pub use snapshot::GraphSnapshot;
