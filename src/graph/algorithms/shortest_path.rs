//! Unit-cost shortest paths and path existence.

use crate::error::Result;
use crate::graph::basic::{EdgeType, Graph};
use crate::graph::search::GraphSearcher;
use crate::graph::types::{Node, Path};

impl<N, E, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Returns true if `n2` can be reached from `n1` under the graph's edge
    /// generator. Every node reaches itself.
    pub fn check_for_path(&self, n1: &Node<N>, n2: &Node<N>) -> Result<bool> {
        self.node(n2.id())?;
        Ok(GraphSearcher::new(self).breadth_first_search(n1)?.reaches(n2.id()))
    }
}

impl<N: Clone, E: Clone, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// A fewest-edges path from `n1` to `n2`, found by uniform-cost search.
    ///
    /// Returns a single-node path when `n1 == n2` and `Ok(None)` when `n2`
    /// is unreachable.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`](crate::GraphError::NodeNotInGraph) if
    /// either endpoint is absent.
    pub fn find_shortest_path(&self, n1: &Node<N>, n2: &Node<N>) -> Result<Option<Path<N, E>>> {
        GraphSearcher::new(self).uniform_cost_search(n1, n2)
    }

    /// The shortest non-trivial path from `node` to any other node.
    ///
    /// Ties between equally close targets go to the smallest id. Returns
    /// `Ok(None)` if no other node is reachable.
    pub fn find_shortest_path_per_node(&self, node: &Node<N>) -> Result<Option<Path<N, E>>> {
        let tree = GraphSearcher::new(self).breadth_first_search(node)?;
        let nearest = tree
            .order()
            .iter()
            .filter(|id| id.as_str() != node.id())
            .filter_map(|id| tree.distance_to(id).map(|d| (d, id)))
            .min();
        Ok(nearest.and_then(|(_, id)| tree.path_to(self, id)))
    }
}
