//! Connected components of undirected graphs.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::graph::access::visited::VisitedSet;
use crate::graph::analysis::GraphAnalyzer;
use crate::graph::basic::{Direction, UndirectedGraph};

/// Component label (from 1) -> member node ids.
pub type Components = BTreeMap<usize, BTreeSet<String>>;

impl<N, E, D> UndirectedGraph<N, E, D> {
    /// Labels the connected components.
    ///
    /// Nodes are scanned in id order; each unexplored node starts a
    /// breadth-first sweep that claims the next label. The components
    /// partition the node set, and an isolated node forms its own component.
    ///
    /// ### Performance Characteristics
    /// | Operation | Complexity | Notes |
    /// |-----------|------------|-------|
    /// | `find_connected_components` | \(O((n + m) \log n)\) | One sweep per component |
    pub fn find_connected_components(&self) -> Components {
        let mut explored = VisitedSet::with_capacity(self.nb_nodes());
        let mut components = Components::new();

        for start in self.node_ids() {
            if !explored.try_visit(start) {
                continue;
            }
            let label = components.len() + 1;
            let mut members = BTreeSet::new();
            let mut frontier = VecDeque::from([start]);
            while let Some(v) = frontier.pop_front() {
                members.insert(v.to_owned());
                for (_, w) in self.successor_ids(v, Direction::Incident) {
                    if explored.try_visit(w) {
                        frontier.push_back(w);
                    }
                }
            }
            tracing::trace!(label, size = members.len(), "component");
            components.insert(label, members);
        }

        tracing::debug!(graph = self.id(), count = components.len(), "connected components");
        components
    }

    /// Lower bound used as a shortest-path-length statistic: the minimum
    /// degree of the graph.
    pub fn shortest_path_length(&self) -> usize {
        GraphAnalyzer::new(self).min_degree()
    }
}
