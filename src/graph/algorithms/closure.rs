//! Transitive closure of directed graphs.
//!
//! Both forms read the reachability index frozen by [`DiGraph::index`], so no
//! traversal runs here. A pair `(i, j)` is in the closure when a path of at
//! least one edge leads from `i` to `j`; in particular `(i, i)` is in it only
//! when `i` lies on a directed cycle.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::basic::{DiGraph, Direction};
use crate::graph::types::Edge;

impl<N, E, D> DiGraph<N, E, D> {
    /// Returns true if `node_id` can reach itself through at least one edge.
    fn on_cycle(&self, node_id: &str) -> bool {
        self.successor_ids(node_id, Direction::Outgoing).any(|(_, next)| {
            self.path_props()
                .get(next)
                .is_some_and(|reach| reach.reaches(node_id))
        })
    }

    /// `(i, j)` pairs of the closure, sources and targets in id order.
    fn closure_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (source, reach) in self.path_props() {
            let mut targets: Vec<&str> = reach.order().iter().map(String::as_str).collect();
            targets.sort_unstable();
            for target in targets {
                if target != source || self.on_cycle(source) {
                    pairs.push((source.as_str(), target));
                }
            }
        }
        pairs
    }

    /// The reachability relation over every ordered pair of nodes.
    pub fn transitive_closure_matrix(&self) -> BTreeMap<(String, String), bool> {
        let mut matrix: BTreeMap<(String, String), bool> = self
            .node_ids()
            .flat_map(|i| self.node_ids().map(move |j| ((i.to_owned(), j.to_owned()), false)))
            .collect();
        for (i, j) in self.closure_pairs() {
            matrix.insert((i.to_owned(), j.to_owned()), true);
        }
        matrix
    }
}

impl<N: Clone, E: Clone + Default, D: Clone> DiGraph<N, E, D> {
    /// A new directed graph over the same nodes with an edge `i -> j` for
    /// every pair in the closure.
    ///
    /// Closure edges are named `"{i}->{j}"` and carry `E::default()`, so the
    /// same input always yields the same edge set.
    pub fn transitive_closure(&self) -> Result<DiGraph<N, E, D>> {
        let mut edges = Vec::new();
        for (i, j) in self.closure_pairs() {
            let start = self.node(i)?.clone();
            let end = self.node(j)?.clone();
            edges.push(Edge::directed(format!("{i}->{j}"), start, end, E::default()));
        }
        tracing::debug!(graph = self.id(), edges = edges.len(), "transitive closure");
        DiGraph::new(
            uuid::Uuid::new_v4().to_string(),
            self.data().clone(),
            self.nodes().cloned(),
            edges,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::graph::{DiGraph, Edge, Node};

    fn n(id: &str) -> Node {
        Node::bare(id)
    }

    fn d(id: &str, s: &str, t: &str) -> Edge {
        Edge::directed(id, n(s), n(t), ())
    }

    fn pairs(g: &DiGraph) -> BTreeSet<(String, String)> {
        g.edges()
            .map(|e| (e.start().id().to_owned(), e.end().id().to_owned()))
            .collect()
    }

    fn pair(i: &str, j: &str) -> (String, String) {
        (i.to_owned(), j.to_owned())
    }

    #[test]
    fn chain_closure_adds_reachable_pairs() {
        let g = DiGraph::new(
            "chain",
            (),
            ["a", "b", "c"].map(n),
            [d("ab", "a", "b"), d("bc", "b", "c")],
        )
        .unwrap();
        let closure = g.transitive_closure().unwrap();
        assert_eq!(
            pairs(&closure),
            BTreeSet::from([pair("a", "b"), pair("a", "c"), pair("b", "c")])
        );
        assert_eq!(closure.nb_nodes(), 3);
        assert!(closure.edge_by_id("a->c").is_ok());
        assert_ne!(closure.id(), g.id());
        assert_eq!(g.nb_edges(), 2);
    }

    #[test]
    fn cycle_members_reach_themselves() {
        let g = DiGraph::new(
            "loop",
            (),
            ["a", "b", "c"].map(n),
            [d("ab", "a", "b"), d("ba", "b", "a"), d("bc", "b", "c")],
        )
        .unwrap();
        let closure = pairs(&g.transitive_closure().unwrap());
        assert!(closure.contains(&pair("a", "a")));
        assert!(closure.contains(&pair("b", "b")));
        assert!(!closure.contains(&pair("c", "c")));
        assert!(closure.contains(&pair("a", "c")));
        assert!(!closure.contains(&pair("c", "a")));
    }

    #[test]
    fn closure_is_idempotent() {
        let g = DiGraph::new(
            "ring",
            (),
            ["bb", "cc", "dd", "ee", "ff"].map(n),
            [
                d("bb_cc", "bb", "cc"),
                d("cc_dd", "cc", "dd"),
                d("dd_ee", "dd", "ee"),
                d("ee_bb", "ee", "bb"),
                d("ee_ff", "ee", "ff"),
            ],
        )
        .unwrap();
        let once = g.transitive_closure().unwrap();
        let twice = once.transitive_closure().unwrap();
        assert_eq!(pairs(&once), pairs(&twice));
    }

    #[test]
    fn matrix_covers_every_ordered_pair() {
        let g = DiGraph::new("m", (), ["a", "b"].map(n), [d("ab", "a", "b")]).unwrap();
        let m = g.transitive_closure_matrix();
        assert_eq!(m.len(), 4);
        assert!(m[&pair("a", "b")]);
        assert!(!m[&pair("b", "a")]);
        assert!(!m[&pair("a", "a")]);
    }
}
