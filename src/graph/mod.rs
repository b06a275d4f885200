//! Graph data model and algorithm suite.
//!
//! Modules are layered leaves first:
//! - `types`: nodes, edges and paths
//! - `basic`: graphs, the adjacency index and the indexed directed graph
//! - `ops`: set algebra over graphs
//! - `search`: breadth-first, depth-first and uniform-cost traversals
//! - `analysis`: degree statistics and independence checks
//! - `algorithms`: shortest paths, components, spanning trees, cycles and
//!   transitive closure

pub(crate) mod access;
pub mod algorithms;
pub mod analysis;
pub mod basic;
pub mod ops;
pub mod search;
pub mod types;

pub use access::VisitState;
pub use algorithms::{Components, SpanningTree};
pub use analysis::GraphAnalyzer;
pub use basic::{
    AdjacencyIndex, DiGraph, Directed, Direction, EdgeType, Graph, GraphSnapshot, Mixed,
    Undirected, UndirectedGraph,
};
pub use ops::{GraphElement, GraphSetOps};
pub use search::{BackEdge, BreadthFirstTree, DfsForest, GraphSearcher, ReachabilitySet};
pub use types::{Cycle, Edge, EdgeKind, Node, Path};
