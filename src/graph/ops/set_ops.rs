//! Union, intersection, containment, subtraction and addition.
//!
//! The set-valued operations (`union`, `intersection`, `difference`,
//! `contains`) compare a caller-supplied collection against the graph's node
//! set or edge set, depending on the element type. `subtract` and `add` build
//! a new graph; the input is never modified.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::basic::{EdgeType, Graph};
use crate::graph::types::{Edge, Node};

/// An element a graph is made of: a [`Node`] or an [`Edge`].
pub trait GraphElement<N, E>: Clone + Ord {
    /// The element's identity.
    fn element_id(&self) -> &str;

    /// The graph's elements of this kind, in id order.
    fn members<'g, D, Ty: EdgeType>(graph: &'g Graph<N, E, D, Ty>) -> Vec<&'g Self>;

    /// Returns true if an element with the same id is in `graph`.
    fn is_member<D, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> bool;

    /// A copy of `graph` without this element.
    fn removed_from<D: Clone, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>>;

    /// A copy of `graph` with this element added.
    fn added_to<D: Clone, Ty: EdgeType>(self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>>;
}

impl<N: Clone, E: Clone> GraphElement<N, E> for Node<N> {
    fn element_id(&self) -> &str {
        self.id()
    }

    fn members<'g, D, Ty: EdgeType>(graph: &'g Graph<N, E, D, Ty>) -> Vec<&'g Self> {
        graph.nodes().collect()
    }

    fn is_member<D, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> bool {
        graph.is_in(self)
    }

    /// Drops the node and every edge incident to it.
    fn removed_from<D: Clone, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>> {
        let id = graph.node(self.id())?.id();
        let nodes = graph.nodes().filter(|n| n.id() != id).cloned();
        let edges = graph.edges().filter(|e| !e.is_incident_to(id)).cloned();
        graph.derive(nodes, edges)
    }

    fn added_to<D: Clone, Ty: EdgeType>(self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>> {
        let nodes = graph.nodes().cloned().chain(std::iter::once(self));
        graph.derive(nodes, graph.edges().cloned())
    }
}

impl<N: Clone, E: Clone> GraphElement<N, E> for Edge<N, E> {
    fn element_id(&self) -> &str {
        self.id()
    }

    fn members<'g, D, Ty: EdgeType>(graph: &'g Graph<N, E, D, Ty>) -> Vec<&'g Self> {
        graph.edges().collect()
    }

    fn is_member<D, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> bool {
        graph.contains_edge(self)
    }

    /// Drops only the edge; its endpoints stay.
    fn removed_from<D: Clone, Ty: EdgeType>(&self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>> {
        let id = graph.edge_by_id(self.id())?.id();
        let edges = graph.edges().filter(|e| e.id() != id).cloned();
        graph.derive(graph.nodes().cloned(), edges)
    }

    /// Fails with [`GraphError::DanglingEdge`](crate::GraphError::DanglingEdge)
    /// if an endpoint is not already in the graph.
    fn added_to<D: Clone, Ty: EdgeType>(self, graph: &Graph<N, E, D, Ty>) -> Result<Graph<N, E, D, Ty>> {
        let edges = graph.edges().cloned().chain(std::iter::once(self));
        graph.derive(graph.nodes().cloned(), edges)
    }
}

/// Set-algebraic operations between a graph and a collection of its elements.
///
/// ```
/// use gmodels::{Edge, GraphSetOps, Node, UndirectedGraph};
///
/// let (a, b, c) = (Node::bare("a"), Node::bare("b"), Node::bare("c"));
/// let ab = Edge::undirected("ab", a.clone(), b.clone(), ());
/// let g = UndirectedGraph::new("g", (), [a.clone(), b, c.clone()], [ab]).unwrap();
///
/// let without_a = GraphSetOps::subtract(&g, &a).unwrap();
/// assert_eq!(without_a.nb_nodes(), 2);
/// assert_eq!(without_a.nb_edges(), 0);
///
/// let common = GraphSetOps::intersection(&g, [c.clone(), Node::bare("zz")]);
/// assert_eq!(common.into_iter().collect::<Vec<_>>(), [c]);
/// ```
pub struct GraphSetOps;

impl GraphSetOps {
    /// The graph's elements of type `T` together with `others`.
    pub fn union<N, E, D, Ty, T, I>(graph: &Graph<N, E, D, Ty>, others: I) -> BTreeSet<T>
    where
        Ty: EdgeType,
        T: GraphElement<N, E>,
        I: IntoIterator<Item = T>,
    {
        let mut out: BTreeSet<T> = T::members(graph).into_iter().cloned().collect();
        out.extend(others);
        out
    }

    /// The elements of `others` that are also in the graph.
    pub fn intersection<N, E, D, Ty, T, I>(graph: &Graph<N, E, D, Ty>, others: I) -> BTreeSet<T>
    where
        Ty: EdgeType,
        T: GraphElement<N, E>,
        I: IntoIterator<Item = T>,
    {
        others.into_iter().filter(|x| x.is_member(graph)).collect()
    }

    /// The graph's elements of type `T` that are not in `others`.
    pub fn difference<N, E, D, Ty, T, I>(graph: &Graph<N, E, D, Ty>, others: I) -> BTreeSet<T>
    where
        Ty: EdgeType,
        T: GraphElement<N, E>,
        I: IntoIterator<Item = T>,
    {
        let others: BTreeSet<T> = others.into_iter().collect();
        T::members(graph)
            .into_iter()
            .filter(|x| !others.contains(*x))
            .cloned()
            .collect()
    }

    /// Returns true if every element of `others` is in the graph.
    pub fn contains<'a, N, E, D, Ty, T, I>(graph: &Graph<N, E, D, Ty>, others: I) -> bool
    where
        Ty: EdgeType,
        T: GraphElement<N, E> + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        others.into_iter().all(|x| x.is_member(graph))
    }

    /// A new graph without `element`.
    ///
    /// Removing a node also removes every edge incident to it.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`](crate::GraphError::NodeNotInGraph) or
    /// [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound) if
    /// `element` is not in the graph.
    pub fn subtract<N, E, D, Ty, T>(graph: &Graph<N, E, D, Ty>, element: &T) -> Result<Graph<N, E, D, Ty>>
    where
        D: Clone,
        Ty: EdgeType,
        T: GraphElement<N, E>,
    {
        let out = element.removed_from(graph)?;
        tracing::trace!(graph = graph.id(), element = element.element_id(), "subtracted");
        Ok(out)
    }

    /// A new graph with `element` added.
    ///
    /// # Errors
    /// [`GraphError::DanglingEdge`](crate::GraphError::DanglingEdge) if an
    /// added edge names an absent node, or
    /// [`GraphError::EdgeKindMismatch`](crate::GraphError::EdgeKindMismatch)
    /// if the graph does not accept its kind.
    pub fn add<N, E, D, Ty, T>(graph: &Graph<N, E, D, Ty>, element: T) -> Result<Graph<N, E, D, Ty>>
    where
        D: Clone,
        Ty: EdgeType,
        T: GraphElement<N, E>,
    {
        element.added_to(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::UndirectedGraph;

    struct Fixture {
        n: Vec<Node>,
        e: Vec<Edge>,
        graph: UndirectedGraph,
    }

    /// n1..n4 with e1 = n1-n2, e2 = n2-n3; e3 = n3-n4 is kept aside.
    fn fixture() -> Fixture {
        let n: Vec<Node> = (1..=4).map(|i| Node::bare(format!("n{i}"))).collect();
        let e = vec![
            Edge::undirected("e1", n[0].clone(), n[1].clone(), ()),
            Edge::undirected("e2", n[1].clone(), n[2].clone(), ()),
            Edge::undirected("e3", n[2].clone(), n[3].clone(), ()),
        ];
        let graph = UndirectedGraph::new("g1", (), n.clone(), e[..2].to_vec()).unwrap();
        Fixture { n, e, graph }
    }

    fn stray() -> Node {
        Node::bare("n646")
    }

    #[test]
    fn intersection_of_nodes_and_edges() {
        let f = fixture();
        let vset = GraphSetOps::intersection(&f.graph, [f.n[0].clone(), stray()]);
        assert_eq!(vset, BTreeSet::from([f.n[0].clone()]));

        let e8 = Edge::undirected("e8", f.n[0].clone(), stray(), ());
        let eset = GraphSetOps::intersection(&f.graph, [f.e[0].clone(), e8]);
        assert_eq!(eset, BTreeSet::from([f.e[0].clone()]));
    }

    #[test]
    fn union_of_nodes_and_edges() {
        let f = fixture();
        let vset = GraphSetOps::union(&f.graph, [stray()]);
        let mut expected: BTreeSet<Node> = f.n.iter().cloned().collect();
        expected.insert(stray());
        assert_eq!(vset, expected);

        let e8 = Edge::undirected("e8", f.n[0].clone(), stray(), ());
        let eset = GraphSetOps::union(&f.graph, [e8.clone()]);
        assert_eq!(eset, BTreeSet::from([e8, f.e[0].clone(), f.e[1].clone()]));
    }

    #[test]
    fn difference_keeps_graph_side() {
        let f = fixture();
        let rest = GraphSetOps::difference(&f.graph, [f.e[0].clone()]);
        assert_eq!(rest, BTreeSet::from([f.e[1].clone()]));
    }

    #[test]
    fn contains_nodes_and_edges() {
        let f = fixture();
        assert!(GraphSetOps::contains(&f.graph, &[f.n[1].clone(), f.n[2].clone()]));
        assert!(GraphSetOps::contains(&f.graph, &f.e[..2]));
        assert!(!GraphSetOps::contains(&f.graph, &f.e[..]));
    }

    #[test]
    fn subtract_node_removes_incident_edges() {
        let f = fixture();
        let gs = GraphSetOps::subtract(&f.graph, &f.n[1]).unwrap();
        assert_eq!(gs.node_ids().collect::<Vec<_>>(), ["n1", "n3", "n4"]);
        assert_eq!(gs.nb_edges(), 0);
        assert_eq!(f.graph.nb_edges(), 2);
    }

    #[test]
    fn subtract_edge_keeps_endpoints() {
        let f = fixture();
        let gs = GraphSetOps::subtract(&f.graph, &f.e[1]).unwrap();
        assert_eq!(gs.edge_ids().collect::<Vec<_>>(), ["e1"]);
        assert_eq!(gs.nb_nodes(), 4);
    }

    #[test]
    fn subtract_missing_element_fails() {
        let f = fixture();
        assert_eq!(
            GraphSetOps::subtract(&f.graph, &stray()).unwrap_err(),
            GraphError::NodeNotInGraph("n646".into())
        );
        assert_eq!(
            GraphSetOps::subtract(&f.graph, &f.e[2]).unwrap_err(),
            GraphError::EdgeNotFound("e3".into())
        );
    }

    #[test]
    fn add_edge_between_existing_nodes() {
        let f = fixture();
        let g = GraphSetOps::add(&f.graph, f.e[2].clone()).unwrap();
        assert_eq!(g.nb_nodes(), f.graph.nb_nodes());
        assert_eq!(g.edge_ids().collect::<Vec<_>>(), ["e1", "e2", "e3"]);
    }

    #[test]
    fn add_edge_with_absent_endpoint_fails() {
        let f = fixture();
        let e8 = Edge::undirected("e8", f.n[0].clone(), stray(), ());
        assert!(matches!(
            GraphSetOps::add(&f.graph, e8).unwrap_err(),
            GraphError::DanglingEdge { node, .. } if node == "n646"
        ));
        let g = GraphSetOps::add(&f.graph, stray()).unwrap();
        assert!(g.is_in(&stray()));
    }
}
