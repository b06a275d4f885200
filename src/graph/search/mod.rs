//! Traversal primitives: breadth-first search, depth-first forest and
//! uniform-cost search.
//!
//! A [`GraphSearcher`] borrows a graph together with an edge-generation
//! strategy ([`Direction`]). By default the strategy comes from the graph's
//! `EdgeType` marker: outgoing edges for directed graphs, every incident edge
//! otherwise.

mod bfs;
mod dfs;
mod ucs;

pub use bfs::{BreadthFirstTree, ReachabilitySet};
pub use dfs::{BackEdge, DfsForest};

use crate::graph::basic::{Direction, EdgeType, Graph};

/// Read-only traversal view over a graph.
pub struct GraphSearcher<'g, N, E, D, Ty> {
    graph: &'g Graph<N, E, D, Ty>,
    direction: Direction,
}

impl<'g, N, E, D, Ty: EdgeType> GraphSearcher<'g, N, E, D, Ty> {
    /// A searcher following the graph type's default edge generator.
    pub fn new(graph: &'g Graph<N, E, D, Ty>) -> Self {
        Self::with_direction(graph, Ty::direction())
    }

    /// A searcher following an explicit edge generator.
    pub fn with_direction(graph: &'g Graph<N, E, D, Ty>, direction: Direction) -> Self {
        Self { graph, direction }
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'g Graph<N, E, D, Ty> {
        self.graph
    }

    /// The edge generator in use.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
