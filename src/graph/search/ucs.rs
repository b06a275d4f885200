//! Uniform-cost search with unit edge costs.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::GraphSearcher;
use crate::error::Result;
use crate::graph::basic::EdgeType;
use crate::graph::types::{Node, Path};

/// A frontier entry; `parent` indexes into the search arena.
struct SearchNode<'g> {
    state: &'g str,
    cost: usize,
    parent: Option<usize>,
    edge_id: Option<&'g str>,
}

impl<'g, N: Clone, E: Clone, D, Ty: EdgeType> GraphSearcher<'g, N, E, D, Ty> {
    /// Finds a minimum-cost path from `start` to `goal`, each edge costing 1.
    ///
    /// The frontier is ordered by `(cost, insertion order)` and the cheapest
    /// entry is always expanded first. When a cheaper route to a state already
    /// on the frontier is found, the new entry supersedes the old one.
    ///
    /// Returns `Ok(None)` when `goal` is unreachable, and a single-node path
    /// when `start == goal`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`](crate::GraphError::NodeNotInGraph) if
    /// either endpoint is absent.
    pub fn uniform_cost_search(&self, start: &Node<N>, goal: &Node<N>) -> Result<Option<Path<N, E>>> {
        let graph = self.graph;
        let start_node = graph.node(start.id())?;
        let goal_id = graph.node(goal.id())?.id();
        if start_node.id() == goal_id {
            return Ok(Some(Path::new(vec![start_node.clone()], Vec::new())));
        }

        let mut arena = vec![SearchNode {
            state: start_node.id(),
            cost: 0,
            parent: None,
            edge_id: None,
        }];
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0usize, 0usize)));
        let mut best: HashMap<&str, usize> = HashMap::from([(start_node.id(), 0)]);
        let mut explored: HashSet<&str> = HashSet::new();

        while let Some(Reverse((cost, idx))) = frontier.pop() {
            let state = arena[idx].state;
            if explored.contains(state) || best.get(state).is_some_and(|&b| cost > b) {
                // superseded by a cheaper entry
                continue;
            }
            if state == goal_id {
                tracing::trace!(from = start_node.id(), to = goal_id, cost, "ucs reached goal");
                return self.extract_path(&arena, idx).map(Some);
            }
            explored.insert(state);

            for (eid, neighbour) in graph.successor_ids(state, self.direction) {
                if explored.contains(neighbour) {
                    continue;
                }
                let child_cost = cost + 1;
                if best.get(neighbour).is_some_and(|&b| b <= child_cost) {
                    continue;
                }
                best.insert(neighbour, child_cost);
                arena.push(SearchNode {
                    state: neighbour,
                    cost: child_cost,
                    parent: Some(idx),
                    edge_id: Some(eid),
                });
                frontier.push(Reverse((child_cost, arena.len() - 1)));
            }
        }

        tracing::debug!(from = start_node.id(), to = goal_id, "no path");
        Ok(None)
    }

    /// Walks parent links from `leaf` back to the root.
    fn extract_path(&self, arena: &[SearchNode<'g>], leaf: usize) -> Result<Path<N, E>> {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut cursor = Some(leaf);
        while let Some(i) = cursor {
            let snode = &arena[i];
            debug_assert!(snode.parent.map_or(snode.cost == 0, |p| arena[p].cost + 1 == snode.cost));
            nodes.push(self.graph.node(snode.state)?.clone());
            if let Some(eid) = snode.edge_id {
                edges.push(self.graph.edge_by_id(eid)?.clone());
            }
            cursor = snode.parent;
        }
        nodes.reverse();
        edges.reverse();
        Ok(Path::new(nodes, edges))
    }
}
