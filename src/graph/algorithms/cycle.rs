//! Cycle detection from the depth-first forest.

use crate::graph::basic::{DiGraph, EdgeType, Graph};
use crate::graph::search::{DfsForest, GraphSearcher};
use crate::graph::types::{Cycle, Path};

impl<N, E, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Returns true if a depth-first walk finds a back edge.
    ///
    /// In an undirected graph, a self-loop or two parallel edges between the
    /// same pair of nodes count as cycles.
    pub fn has_cycle(&self) -> bool {
        GraphSearcher::new(self).depth_first_forest(true).has_back_edge()
    }
}

impl<N: Clone, E: Clone, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// The cycle closed by the first back edge, if any.
    ///
    /// The returned walk starts at the back edge's ancestor, follows tree
    /// edges down to the descendant and ends with the closing edge, so it has
    /// as many edges as nodes.
    pub fn find_cycle(&self) -> Option<Cycle<N, E>> {
        let forest = GraphSearcher::new(self).depth_first_forest(true);
        cycle_from_forest(self, &forest)
    }
}

impl<N: Clone, E: Clone, D> DiGraph<N, E, D> {
    /// The directed cycle recorded while indexing, if any.
    pub fn find_cycle(&self) -> Option<Cycle<N, E>> {
        cycle_from_forest(self.as_graph(), self.cycle_info())
    }
}

/// Walks tree edges from the back edge's descendant up to its ancestor.
fn cycle_from_forest<N, E, D, Ty>(graph: &Graph<N, E, D, Ty>, forest: &DfsForest) -> Option<Cycle<N, E>>
where
    N: Clone,
    E: Clone,
    Ty: EdgeType,
{
    let back = forest.back_edge()?;

    let mut nodes = vec![graph.node_entry(&back.descendant)?.clone()];
    let mut edges = Vec::new();
    let mut current = back.descendant.as_str();
    while current != back.ancestor {
        let parent = forest.predecessor(current)?;
        edges.push(graph.edge_entry(forest.tree_edge(current)?)?.clone());
        nodes.push(graph.node_entry(parent)?.clone());
        current = parent;
    }
    nodes.reverse();
    edges.reverse();
    edges.push(graph.edge_entry(&back.edge)?.clone());

    tracing::debug!(graph = graph.id(), length = edges.len(), "found cycle");
    Some(Path::new(nodes, edges))
}

#[cfg(test)]
mod tests {
    use crate::graph::{DiGraph, Edge, Node, UndirectedGraph};

    fn n(id: &str) -> Node {
        Node::bare(id)
    }

    fn d(id: &str, s: &str, t: &str) -> Edge {
        Edge::directed(id, n(s), n(t), ())
    }

    fn ring(closed: bool) -> DiGraph {
        let mut edges = vec![
            d("bb_cc", "bb", "cc"),
            d("cc_dd", "cc", "dd"),
            d("dd_ee", "dd", "ee"),
            d("bb_dd", "bb", "dd"),
        ];
        if closed {
            edges.push(d("ee_bb", "ee", "bb"));
        }
        DiGraph::new("ring", (), ["bb", "cc", "dd", "ee"].map(n), edges).unwrap()
    }

    #[test]
    fn directed_ring_has_cycle() {
        let g = ring(true);
        assert!(g.has_cycle());
        let cycle = g.find_cycle().unwrap();
        assert_eq!(cycle.node_ids(), ["bb", "cc", "dd", "ee"]);
        assert_eq!(cycle.edge_ids(), ["bb_cc", "cc_dd", "dd_ee", "ee_bb"]);
        assert_eq!(cycle.edges().len(), cycle.nodes().len());
    }

    #[test]
    fn open_ring_is_acyclic() {
        let g = ring(false);
        assert!(!g.has_cycle());
        assert!(g.find_cycle().is_none());
        assert!(!g.as_graph().has_cycle());
    }

    #[test]
    fn tree_gains_cycle_with_one_more_edge() {
        let nodes = ["a", "b", "c", "d"].map(n);
        let tree_edges = vec![
            Edge::undirected("ab", n("a"), n("b"), ()),
            Edge::undirected("ac", n("a"), n("c"), ()),
            Edge::undirected("cd", n("c"), n("d"), ()),
        ];
        let tree = UndirectedGraph::new("t", (), nodes.clone(), tree_edges.clone()).unwrap();
        assert!(!tree.has_cycle());

        let mut edges = tree_edges;
        edges.push(Edge::undirected("bd", n("b"), n("d"), ()));
        let g = UndirectedGraph::new("c", (), nodes, edges).unwrap();
        assert!(g.has_cycle());
        let cycle = g.find_cycle().unwrap();
        assert_eq!(cycle.length(), 4);
        let first = cycle.nodes().first().unwrap().id();
        let last_edge = cycle.edges().last().unwrap();
        assert!(last_edge.is_incident_to(first));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = UndirectedGraph::new(
            "l",
            (),
            [n("a")],
            [Edge::undirected("aa", n("a"), n("a"), ())],
        )
        .unwrap();
        let cycle = g.find_cycle().unwrap();
        assert_eq!(cycle.node_ids(), ["a"]);
        assert_eq!(cycle.edge_ids(), ["aa"]);
    }
}
