//! Breadth-first search.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::GraphSearcher;
use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::{EdgeType, Graph};
use crate::graph::types::{Node, Path};

/// The breadth-first tree grown from a single root.
///
/// Records the visit order, the hop distance of every reached node and the
/// `(parent, edge)` pair it was discovered through. With unit edge costs the
/// tree edges form shortest paths from the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadthFirstTree {
    root: String,
    order: Vec<String>,
    distance: BTreeMap<String, usize>,
    parent: BTreeMap<String, (String, String)>,
}

/// Per-node reachability record kept by directed graphs.
pub type ReachabilitySet = BreadthFirstTree;

impl BreadthFirstTree {
    /// The node the search started from.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Reached node ids in visit order, root first.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Every reached node id, root included.
    pub fn path_set(&self) -> BTreeSet<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Number of reached nodes, root included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if `node_id` was reached. The root reaches itself.
    pub fn reaches(&self, node_id: &str) -> bool {
        self.distance.contains_key(node_id)
    }

    /// Hop count from the root, if reached.
    pub fn distance_to(&self, node_id: &str) -> Option<usize> {
        self.distance.get(node_id).copied()
    }

    /// The node `node_id` was discovered from.
    pub fn predecessor(&self, node_id: &str) -> Option<&str> {
        self.parent.get(node_id).map(|(p, _)| p.as_str())
    }

    /// Rebuilds the tree path from the root to `target`.
    ///
    /// Returns `None` if `target` was not reached.
    pub fn path_to<N, E, D, Ty>(&self, graph: &Graph<N, E, D, Ty>, target: &str) -> Option<Path<N, E>>
    where
        N: Clone,
        E: Clone,
        Ty: EdgeType,
    {
        if !self.reaches(target) {
            return None;
        }
        let mut nodes = vec![graph.node_entry(target)?.clone()];
        let mut edges = Vec::new();
        let mut current = target;
        while let Some((parent, edge)) = self.parent.get(current) {
            edges.push(graph.edge_entry(edge)?.clone());
            nodes.push(graph.node_entry(parent)?.clone());
            current = parent.as_str();
        }
        nodes.reverse();
        edges.reverse();
        Some(Path::new(nodes, edges))
    }
}

impl<'g, N, E, D, Ty: EdgeType> GraphSearcher<'g, N, E, D, Ty> {
    /// Breadth-first search from `start` with an explicit FIFO frontier.
    ///
    /// Each node is visited once; visit order depends only on discovery order
    /// (neighbours are expanded in edge-id order).
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`](crate::GraphError::NodeNotInGraph) if
    /// `start` is absent.
    pub fn breadth_first_search(&self, start: &Node<N>) -> Result<BreadthFirstTree> {
        let root = self.graph.node(start.id())?.id();

        let mut visited = VisitedSet::with_capacity(self.graph.nb_nodes());
        let mut queue = VecDeque::new();
        let mut order = Vec::new();
        let mut distance = BTreeMap::new();
        let mut parent = BTreeMap::new();

        visited.try_visit(root);
        distance.insert(root.to_owned(), 0);
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            order.push(u.to_owned());
            let du = distance.get(u).copied().unwrap_or_default();
            for (eid, v) in self.graph.successor_ids(u, self.direction) {
                if visited.try_visit(v) {
                    tracing::trace!(from = u, to = v, edge = eid, "bfs discovered");
                    distance.insert(v.to_owned(), du + 1);
                    parent.insert(v.to_owned(), (u.to_owned(), eid.to_owned()));
                    queue.push_back(v);
                }
            }
        }

        Ok(BreadthFirstTree {
            root: root.to_owned(),
            order,
            distance,
            parent,
        })
    }

    /// One breadth-first tree per node, keyed by the root's id.
    pub fn reachability_index(&self) -> Result<BTreeMap<String, ReachabilitySet>> {
        self.graph
            .nodes()
            .map(|node| Ok((node.id().to_owned(), self.breadth_first_search(node)?)))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<'g, N: Sync, E: Sync, D: Sync, Ty: EdgeType + Sync> GraphSearcher<'g, N, E, D, Ty> {
    /// [`GraphSearcher::reachability_index`] with one rayon task per root.
    pub fn par_reachability_index(&self) -> Result<BTreeMap<String, ReachabilitySet>> {
        use rayon::prelude::*;

        let roots: Vec<&Node<N>> = self.graph.nodes().collect();
        roots
            .par_iter()
            .map(|node| Ok((node.id().to_owned(), self.breadth_first_search(node)?)))
            .collect()
    }
}
