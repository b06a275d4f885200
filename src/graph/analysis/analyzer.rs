//! Read-only structural statistics over a graph.
//!
//! Degrees come straight from the adjacency index, so every statistic is a
//! single pass over it. A self-loop contributes one to its node's degree.

use crate::error::{GraphError, Result};
use crate::graph::basic::{EdgeType, Graph};
use crate::graph::types::Node;

/// Borrowed view answering degree and independence questions.
pub struct GraphAnalyzer<'g, N, E, D, Ty> {
    graph: &'g Graph<N, E, D, Ty>,
}

impl<'g, N, E, D, Ty: EdgeType> GraphAnalyzer<'g, N, E, D, Ty> {
    /// Analyzer over `graph`.
    pub fn new(graph: &'g Graph<N, E, D, Ty>) -> Self {
        Self { graph }
    }

    /// Number of nodes.
    pub fn nb_nodes(&self) -> usize {
        self.graph.nb_nodes()
    }

    /// Number of edges.
    pub fn nb_edges(&self) -> usize {
        self.graph.nb_edges()
    }

    fn degrees(&self) -> impl Iterator<Item = (&'g str, usize)> + 'g {
        let graph = self.graph;
        graph
            .adjacency()
            .iter()
            .map(|(id, incident)| (id.as_str(), incident.len()))
    }

    /// Largest degree; 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.degrees().map(|(_, d)| d).max().unwrap_or(0)
    }

    /// Smallest degree; 0 for an empty graph.
    pub fn min_degree(&self) -> usize {
        self.degrees().map(|(_, d)| d).min().unwrap_or(0)
    }

    /// Nodes whose degree equals [`max_degree`](Self::max_degree), in id order.
    pub fn max_degree_vertices(&self) -> Vec<&'g Node<N>> {
        self.vertices_with_degree(self.max_degree())
    }

    /// Nodes whose degree equals [`min_degree`](Self::min_degree), in id order.
    pub fn min_degree_vertices(&self) -> Vec<&'g Node<N>> {
        self.vertices_with_degree(self.min_degree())
    }

    fn vertices_with_degree(&self, degree: usize) -> Vec<&'g Node<N>> {
        let graph = self.graph;
        self.degrees()
            .filter(|&(_, d)| d == degree)
            .filter_map(|(id, _)| graph.node_entry(id))
            .collect()
    }

    /// `2 |E| / |V|`; 0 for an empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.graph.is_empty() {
            return 0.0;
        }
        2.0 * self.nb_edges() as f64 / self.nb_nodes() as f64
    }

    /// `|E| / |V|`; 0 for an empty graph.
    pub fn edge_vertex_ratio(&self) -> f64 {
        self.average_degree() / 2.0
    }

    /// Alias of [`edge_vertex_ratio`](Self::edge_vertex_ratio).
    pub fn ev_ratio(&self) -> f64 {
        self.edge_vertex_ratio()
    }

    /// The edge/vertex ratio implied by a given average degree.
    pub fn ev_ratio_from_average_degree(&self, average_degree: f64) -> f64 {
        average_degree / 2.0
    }

    /// Returns true if some edge starts and ends at the same node.
    pub fn has_self_loop(&self) -> bool {
        self.graph.edges().any(|e| e.is_self_loop())
    }

    /// Returns true if `n1` and `n2` share no edge.
    pub fn is_node_independent_of(&self, n1: &Node<N>, n2: &Node<N>) -> Result<bool> {
        Ok(!self.graph.is_neighbour_of(n1, n2)?)
    }

    /// Returns true if no two distinct nodes of `nodes` are neighbours.
    ///
    /// Stops at the first adjacent pair.
    ///
    /// # Errors
    /// [`GraphError::NodesNotInGraph`] listing every absent node, raised before
    /// any pair is examined.
    pub fn is_stable<'a, I>(&self, nodes: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Node<N>>,
        N: 'a,
    {
        let nodes: Vec<&Node<N>> = nodes.into_iter().collect();
        let missing: Vec<String> = nodes
            .iter()
            .filter(|n| !self.graph.is_in(n))
            .map(|n| n.id().to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(GraphError::NodesNotInGraph(missing));
        }

        for (i, n1) in nodes.iter().enumerate() {
            for n2 in &nodes[i + 1..] {
                if n1.id() != n2.id() && self.graph.is_neighbour_of(n1, n2)? {
                    tracing::trace!(n1 = n1.id(), n2 = n2.id(), "not stable");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
