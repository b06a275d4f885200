//! Directed graph with an eagerly built reachability index.
//!
//! Construction happens in two phases: [`Graph::new`] validates the node and
//! edge sets, then [`DiGraph::index`] runs a breadth-first search from every
//! node and a cycle-checking depth-first walk, freezing both results. Path
//! existence queries afterwards are map lookups.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `index` | \(O(n (n + m))\) | One BFS per node plus one DFS |
//! | `check_for_path` | \(O(\log n)\) | Lookup in the frozen index |
//! | `has_cycle` | \(O(1)\) | Cached DFS result |

use std::collections::BTreeMap;
use std::ops::Deref;

use super::graph::{Directed, EdgeType, Graph, UndirectedGraph};
use crate::error::{GraphError, Result};
use crate::graph::search::{DfsForest, GraphSearcher, ReachabilitySet};
use crate::graph::types::{Edge, EdgeKind, Node};

/// A directed graph plus its frozen reachability and cycle information.
#[derive(Clone, Debug)]
pub struct DiGraph<N = (), E = (), D = ()> {
    graph: Graph<N, E, D, Directed>,
    path_props: BTreeMap<String, ReachabilitySet>,
    cycle_info: DfsForest,
}

impl<N, E, D> DiGraph<N, E, D> {
    /// Builds and indexes a directed graph.
    ///
    /// # Errors
    /// - Construction errors from [`Graph::new`], including
    ///   [`GraphError::EdgeKindMismatch`] for any undirected edge.
    /// - [`GraphError::IndexBuild`] if indexing fails.
    pub fn new<I, J>(id: impl Into<String>, data: D, nodes: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Node<N>>,
        J: IntoIterator<Item = Edge<N, E>>,
    {
        Self::index(Graph::new(id, data, nodes, edges)?)
    }

    /// Freezes a validated directed graph together with its derived index.
    ///
    /// # Errors
    /// [`GraphError::IndexBuild`] wrapping the underlying failure.
    pub fn index(graph: Graph<N, E, D, Directed>) -> Result<Self> {
        let searcher = GraphSearcher::new(&graph);
        let path_props = searcher
            .reachability_index()
            .map_err(|e| GraphError::IndexBuild(Box::new(e)))?;
        let cycle_info = searcher.depth_first_forest(true);
        tracing::debug!(
            graph = graph.id(),
            nodes = graph.nb_nodes(),
            cyclic = cycle_info.has_back_edge(),
            "indexed digraph"
        );
        Ok(Self {
            graph,
            path_props,
            cycle_info,
        })
    }

    /// Re-validates any graph as directed and indexes it under a fresh id.
    ///
    /// # Errors
    /// [`GraphError::EdgeKindMismatch`] if `graph` holds an undirected edge.
    pub fn from_graph<Ty: EdgeType>(graph: Graph<N, E, D, Ty>) -> Result<Self> {
        let (_, data, nodes, edges) = graph.into_parts();
        Self::index(Graph::with_random_id(data, nodes, edges)?)
    }

    /// The underlying directed graph.
    pub fn as_graph(&self) -> &Graph<N, E, D, Directed> {
        &self.graph
    }

    /// Drops the index, returning the underlying graph.
    pub fn into_graph(self) -> Graph<N, E, D, Directed> {
        self.graph
    }

    /// Nodes reachable from `node` along directed paths.
    pub fn reachability(&self, node: &Node<N>) -> Result<&ReachabilitySet> {
        self.path_props
            .get(node.id())
            .ok_or_else(|| GraphError::NodeNotInGraph(node.id().to_owned()))
    }

    /// The full reachability index, keyed by source node id.
    pub fn path_props(&self) -> &BTreeMap<String, ReachabilitySet> {
        &self.path_props
    }

    /// Returns true if a directed path leads from `n1` to `n2`. Every node
    /// reaches itself.
    pub fn check_for_path(&self, n1: &Node<N>, n2: &Node<N>) -> Result<bool> {
        self.graph.node(n2.id())?;
        Ok(self.reachability(n1)?.reaches(n2.id()))
    }

    /// The cached cycle-checking depth-first forest.
    pub fn cycle_info(&self) -> &DfsForest {
        &self.cycle_info
    }

    /// Returns true if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle_info.has_back_edge()
    }
}

impl<N: Clone, E: Clone, D: Clone> DiGraph<N, E, D> {
    /// An undirected copy with freshly re-tagged edges and a new id.
    ///
    /// The original graph and its edges are left untouched.
    pub fn to_undirected(&self) -> Result<UndirectedGraph<N, E, D>> {
        let edges = self.graph.edges().map(|e| e.with_kind(EdgeKind::Undirected));
        UndirectedGraph::with_random_id(self.graph.data().clone(), self.graph.nodes().cloned(), edges)
    }
}

#[cfg(feature = "parallel")]
impl<N: Sync, E: Sync, D: Sync> DiGraph<N, E, D> {
    /// Like [`DiGraph::index`], computing per-node reachability with rayon.
    pub fn index_parallel(graph: Graph<N, E, D, Directed>) -> Result<Self> {
        let searcher = GraphSearcher::new(&graph);
        let path_props = searcher
            .par_reachability_index()
            .map_err(|e| GraphError::IndexBuild(Box::new(e)))?;
        let cycle_info = searcher.depth_first_forest(true);
        Ok(Self {
            graph,
            path_props,
            cycle_info,
        })
    }
}

impl<N, E, D> Deref for DiGraph<N, E, D> {
    type Target = Graph<N, E, D, Directed>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Mixed;

    fn n(id: &str) -> Node {
        Node::bare(id)
    }

    fn d(id: &str, s: &str, t: &str) -> Edge {
        Edge::directed(id, n(s), n(t), ())
    }

    fn ring() -> DiGraph {
        DiGraph::new(
            "ring",
            (),
            ["bb", "cc", "dd", "ee"].map(n),
            [
                d("bb_cc", "bb", "cc"),
                d("cc_dd", "cc", "dd"),
                d("dd_ee", "dd", "ee"),
                d("ee_bb", "ee", "bb"),
                d("bb_dd", "bb", "dd"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_undirected_edges() {
        let err = DiGraph::new(
            "d",
            (),
            [n("a"), n("b")],
            [Edge::undirected("ab", n("a"), n("b"), ())],
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::EdgeKindMismatch { .. }));
    }

    #[test]
    fn reachability_is_directional() {
        let g = DiGraph::new(
            "d",
            (),
            [n("a"), n("b"), n("c")],
            [d("ab", "a", "b"), d("bc", "b", "c")],
        )
        .unwrap();
        assert!(g.check_for_path(&n("a"), &n("c")).unwrap());
        assert!(!g.check_for_path(&n("c"), &n("a")).unwrap());
        assert!(g.check_for_path(&n("b"), &n("b")).unwrap());
        assert!(g.check_for_path(&n("a"), &n("zz")).is_err());
        assert_eq!(g.reachability(&n("a")).unwrap().len(), 3);
        assert!(!g.has_cycle());
    }

    #[test]
    fn cycle_info_is_cached() {
        assert!(ring().has_cycle());
        assert!(ring().cycle_info().back_edge().is_some());
    }

    #[test]
    fn from_graph_assigns_fresh_id_and_validates() {
        let mixed = Graph::<(), (), (), Mixed>::new(
            "m",
            (),
            [n("a"), n("b")],
            [d("ab", "a", "b")],
        )
        .unwrap();
        let dg = DiGraph::from_graph(mixed.clone()).unwrap();
        assert_ne!(dg.id(), "m");
        assert_eq!(dg.nb_edges(), 1);

        let bad = Graph::<(), (), (), Mixed>::new(
            "m2",
            (),
            [n("a"), n("b")],
            [Edge::undirected("ab", n("a"), n("b"), ())],
        )
        .unwrap();
        assert!(DiGraph::from_graph(bad).is_err());
    }

    #[test]
    fn to_undirected_copies_edges() {
        let g = ring();
        let u = g.to_undirected().unwrap();
        assert_eq!(u.nb_edges(), g.nb_edges());
        assert!(u.check_edge_kind(EdgeKind::Undirected));
        assert!(g.check_edge_kind(EdgeKind::Directed));
        assert_ne!(u.id(), g.id());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_index_matches_sequential() {
        let graph = Graph::<(), (), (), Directed>::new(
            "cyc",
            (),
            ["a", "b", "c", "d"].map(n),
            [
                d("ab", "a", "b"),
                d("bc", "b", "c"),
                d("ca", "c", "a"),
                d("cd", "c", "d"),
            ],
        )
        .unwrap();
        let sequential = DiGraph::index(graph.clone()).unwrap();
        let parallel = DiGraph::index_parallel(graph).unwrap();
        assert_eq!(parallel.path_props(), sequential.path_props());
        assert_eq!(parallel.cycle_info(), sequential.cycle_info());
        assert!(parallel.has_cycle());
        assert!(!parallel.check_for_path(&n("d"), &n("a")).unwrap());
    }
}
