//! Minimum spanning tree (Prim).
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `minimum_spanning_tree_by` | \(O(n \cdot m)\) | Rescans every edge per step |
//!
//! The cut is rescanned in edge-id order at every step, so among equal-weight
//! crossing edges the smallest id is always chosen and the tree is
//! reproducible.

use std::cmp::Ordering;

use num_traits::{One, Zero};

use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::UndirectedGraph;
use crate::graph::types::Edge;

/// A spanning tree together with its total weight.
#[derive(Clone, Debug)]
pub struct SpanningTree<N = (), E = (), D = (), W = usize> {
    /// The tree: every node of the source graph and the selected edges.
    pub graph: UndirectedGraph<N, E, D>,
    /// Sum of the selected edges' weights.
    pub total_weight: W,
}

impl<N: Clone, E: Clone, D: Clone> UndirectedGraph<N, E, D> {
    /// Minimum spanning tree under unit edge weights.
    ///
    /// See [`minimum_spanning_tree_by`](Self::minimum_spanning_tree_by).
    pub fn minimum_spanning_tree(&self) -> Result<Option<SpanningTree<N, E, D, usize>>> {
        self.minimum_spanning_tree_by(|_| usize::one())
    }

    /// Minimum spanning tree under `weight`, grown from the lowest-id node.
    ///
    /// Returns `Ok(None)` if the graph is disconnected. An empty graph yields
    /// an empty tree of weight zero. Self-loops never cross the cut and are
    /// never selected. Edges whose weight is not comparable with itself
    /// (a NaN float) are skipped, so a graph held together only by such
    /// edges has no tree.
    pub fn minimum_spanning_tree_by<W, F>(&self, weight: F) -> Result<Option<SpanningTree<N, E, D, W>>>
    where
        W: PartialOrd + Copy + Zero,
        F: Fn(&Edge<N, E>) -> W,
    {
        let Some(root) = self.node_ids().next() else {
            return Ok(Some(SpanningTree {
                graph: self.derive(std::iter::empty(), std::iter::empty())?,
                total_weight: W::zero(),
            }));
        };

        let mut in_tree = VisitedSet::with_capacity(self.nb_nodes());
        in_tree.try_visit(root);
        let mut selected: Vec<&Edge<N, E>> = Vec::with_capacity(self.nb_nodes().saturating_sub(1));
        let mut total = W::zero();

        while in_tree.len() < self.nb_nodes() {
            let mut best: Option<(&Edge<N, E>, W, &str)> = None;
            for edge in self.edges() {
                let (s, t) = (edge.start().id(), edge.end().id());
                let outside = match (in_tree.is_visited(s), in_tree.is_visited(t)) {
                    (true, false) => t,
                    (false, true) => s,
                    _ => continue,
                };
                let w = weight(edge);
                if w.partial_cmp(&w).is_none() {
                    tracing::trace!(edge = edge.id(), "skipping unordered weight");
                    continue;
                }
                let lighter = best.map_or(true, |(_, bw, _)| w.partial_cmp(&bw) == Some(Ordering::Less));
                if lighter {
                    best = Some((edge, w, outside));
                }
            }

            let Some((edge, w, outside)) = best else {
                tracing::debug!(
                    graph = self.id(),
                    spanned = in_tree.len(),
                    nodes = self.nb_nodes(),
                    "graph is disconnected, no spanning tree"
                );
                return Ok(None);
            };
            let Some(outside) = self.node_entry(outside) else {
                return Ok(None);
            };
            in_tree.try_visit(outside.id());
            total = total + w;
            selected.push(edge);
        }

        let graph = self.derive(self.nodes().cloned(), selected.into_iter().cloned())?;
        tracing::debug!(graph = self.id(), tree = graph.id(), edges = graph.nb_edges(), "spanning tree");
        Ok(Some(SpanningTree {
            graph,
            total_weight: total,
        }))
    }
}
