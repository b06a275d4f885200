//! Id-keyed graph with a derived adjacency index.
//!
//! A `Graph` owns its node set and edge set, both keyed and iterated by id,
//! and an adjacency index mapping each node id to the ids of its incident
//! edges. The index is derived once at construction and never edited: graphs
//! are immutable, and every operation that "changes" a graph builds a new one.
//!
//! The edge-directionality policy is a marker type parameter:
//! - [`Undirected`]: only undirected edges, traversal follows every incident edge
//! - [`Directed`]: only directed edges, traversal follows outgoing edges
//! - [`Mixed`]: any edge kind, traversal follows every incident edge

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, EdgeKind, Node};

/// Which edges a traversal may follow out of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Directed edges leaving the node, plus undirected incident edges.
    Outgoing,
    /// Every incident edge, regardless of kind.
    Incident,
}

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// The kind every edge must carry, or `None` if kinds may be mixed.
    fn required_kind() -> Option<EdgeKind>;

    /// Edge-generation strategy used by searches over this graph type.
    fn direction() -> Direction;

    /// Returns true if the graph is directed.
    fn is_directed() -> bool {
        Self::required_kind() == Some(EdgeKind::Directed)
    }
}

/// Marker for directed graphs.
#[derive(Clone, Copy, Debug)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Clone, Copy, Debug)]
pub struct Undirected;
/// Marker for graphs that accept both edge kinds.
#[derive(Clone, Copy, Debug)]
pub struct Mixed;

impl EdgeType for Directed {
    fn required_kind() -> Option<EdgeKind> {
        Some(EdgeKind::Directed)
    }
    fn direction() -> Direction {
        Direction::Outgoing
    }
}
impl EdgeType for Undirected {
    fn required_kind() -> Option<EdgeKind> {
        Some(EdgeKind::Undirected)
    }
    fn direction() -> Direction {
        Direction::Incident
    }
}
impl EdgeType for Mixed {
    fn required_kind() -> Option<EdgeKind> {
        None
    }
    fn direction() -> Direction {
        Direction::Incident
    }
}

/// A graph whose edges are all undirected.
pub type UndirectedGraph<N = (), E = (), D = ()> = Graph<N, E, D, Undirected>;

/// Adjacency index: node id -> ids of incident edges.
pub type AdjacencyIndex = BTreeMap<String, BTreeSet<String>>;

/// An immutable graph over id-keyed nodes and edges.
///
/// `N`, `E` and `D` are the node, edge and graph payload types; `Ty` selects
/// the directionality policy.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O((n + m) \log n)\) | Validates edges, builds adjacency |
/// | `node` / `edge_by_id` | \(O(\log n)\) | Ordered map lookup |
/// | `edges_of` / `neighbours_of` | \(O(d \log m)\) | Via adjacency index |
/// | `edge_by_vertices` | \(O(d \log m)\) | Scans incident edges of `n1` |
#[derive(Clone, Debug)]
pub struct Graph<N = (), E = (), D = (), Ty = Mixed> {
    id: String,
    data: D,
    nodes: BTreeMap<String, Node<N>>,
    edges: BTreeMap<String, Edge<N, E>>,
    adjacency: AdjacencyIndex,
    _marker: PhantomData<Ty>,
}

impl<N, E, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Builds a graph from a node collection and an edge collection.
    ///
    /// Nodes and edges are deduplicated by id; the first occurrence wins.
    ///
    /// # Errors
    /// - [`GraphError::EdgeKindMismatch`] if an edge's kind is not accepted
    ///   by `Ty`.
    /// - [`GraphError::DanglingEdge`] if an edge endpoint is not in `nodes`.
    pub fn new<I, J>(id: impl Into<String>, data: D, nodes: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Node<N>>,
        J: IntoIterator<Item = Edge<N, E>>,
    {
        let id = id.into();

        let mut node_map = BTreeMap::new();
        for node in nodes {
            node_map.entry(node.id().to_owned()).or_insert(node);
        }

        let mut edge_map = BTreeMap::new();
        for edge in edges {
            if let Some(expected) = Ty::required_kind() {
                if edge.kind() != expected {
                    return Err(GraphError::EdgeKindMismatch {
                        edge: edge.id().to_owned(),
                        expected,
                        found: edge.kind(),
                    });
                }
            }
            for endpoint in [edge.start(), edge.end()] {
                if !node_map.contains_key(endpoint.id()) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.id().to_owned(),
                        node: endpoint.id().to_owned(),
                    });
                }
            }
            edge_map.entry(edge.id().to_owned()).or_insert(edge);
        }

        let adjacency = build_adjacency(&node_map, &edge_map);
        tracing::debug!(
            graph = %id,
            nodes = node_map.len(),
            edges = edge_map.len(),
            "built graph"
        );

        let graph = Self {
            id,
            data,
            nodes: node_map,
            edges: edge_map,
            adjacency,
            _marker: PhantomData,
        };
        debug_assert!(graph.validate_invariants());
        Ok(graph)
    }

    /// Builds a graph with a fresh random id.
    pub fn with_random_id<I, J>(data: D, nodes: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Node<N>>,
        J: IntoIterator<Item = Edge<N, E>>,
    {
        Self::new(uuid::Uuid::new_v4().to_string(), data, nodes, edges)
    }

    /// The graph's identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The graph's payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.nodes.values()
    }

    /// Edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, E>> + '_ {
        self.edges.values()
    }

    /// Node ids in order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// Edge ids in order.
    pub fn edge_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.keys().map(String::as_str)
    }

    /// Number of nodes.
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn nb_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The derived adjacency index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Result<&Node<N>> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotInGraph(id.to_owned()))
    }

    /// Looks up an edge by id.
    pub fn edge_by_id(&self, id: &str) -> Result<&Edge<N, E>> {
        self.edges
            .get(id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_owned()))
    }

    /// Returns true if a node with the same id is in the graph.
    pub fn is_in(&self, node: &Node<N>) -> bool {
        self.nodes.contains_key(node.id())
    }

    /// Returns true if an edge with the same id is in the graph.
    pub fn contains_edge(&self, edge: &Edge<N, E>) -> bool {
        self.edges.contains_key(edge.id())
    }

    /// Returns true if every node of `nodes` is in the graph.
    pub fn contains_vertices<'a, I>(&self, nodes: I) -> bool
    where
        I: IntoIterator<Item = &'a Node<N>>,
        N: 'a,
    {
        nodes.into_iter().all(|n| self.is_in(n))
    }

    /// Returns true if every edge of `edges` is in the graph.
    pub fn contains_edges<'a, I>(&self, edges: I) -> bool
    where
        I: IntoIterator<Item = &'a Edge<N, E>>,
        N: 'a,
        E: 'a,
    {
        edges.into_iter().all(|e| self.contains_edge(e))
    }

    /// Ids of the edges incident to `node_id`.
    pub fn incident_edge_ids(&self, node_id: &str) -> Result<&BTreeSet<String>> {
        self.adjacency
            .get(node_id)
            .ok_or_else(|| GraphError::NodeNotInGraph(node_id.to_owned()))
    }

    /// Edges incident to `node`, in id order.
    pub fn edges_of(&self, node: &Node<N>) -> Result<Vec<&Edge<N, E>>> {
        self.incident_edges(node.id())
    }

    /// Number of edges incident to `node`. A self-loop counts once.
    pub fn degree(&self, node: &Node<N>) -> Result<usize> {
        Ok(self.incident_edge_ids(node.id())?.len())
    }

    /// The first edge (in id order) whose endpoint set is exactly `{n1, n2}`.
    ///
    /// Orientation is ignored: for a directed edge `n2 -> n1` this still
    /// returns the edge.
    pub fn edge_by_vertices(&self, n1: &Node<N>, n2: &Node<N>) -> Result<&Edge<N, E>> {
        self.node(n2.id())?;
        self.incident_edges(n1.id())?
            .into_iter()
            .find(|e| e.opposite(n1.id()).is_some_and(|o| o.id() == n2.id()))
            .ok_or_else(|| GraphError::NoEdgeBetween {
                start: n1.id().to_owned(),
                end: n2.id().to_owned(),
            })
    }

    /// Nodes sharing at least one incident edge with `node`, in id order.
    ///
    /// `node` itself is included only if it carries a self-loop.
    pub fn neighbours_of(&self, node: &Node<N>) -> Result<Vec<&Node<N>>> {
        self.neighbours_by(node.id(), Direction::Incident)
    }

    /// Returns true if `n1` and `n2` share an incident edge.
    ///
    /// A node is its own neighbour only through a self-loop, matching
    /// [`neighbours_of`](Self::neighbours_of).
    pub fn is_neighbour_of(&self, n1: &Node<N>, n2: &Node<N>) -> Result<bool> {
        if n1.id() == n2.id() {
            return Ok(self.incident_edges(n1.id())?.into_iter().any(Edge::is_self_loop));
        }
        let a = self.incident_edge_ids(n1.id())?;
        let b = self.incident_edge_ids(n2.id())?;
        Ok(!a.is_disjoint(b))
    }

    /// Returns true if `node` is an endpoint of `edge`.
    pub fn is_node_incident(&self, node: &Node<N>, edge: &Edge<N, E>) -> bool {
        edge.is_endvertex(node)
    }

    /// Returns true if the two edges share an endpoint.
    pub fn is_adjacent_of(&self, e1: &Edge<N, E>, e2: &Edge<N, E>) -> bool {
        e1.is_adjacent_to(e2)
    }

    /// Edges a traversal may leave `node` through: directed edges starting at
    /// `node` and undirected edges incident to it.
    pub fn outgoing_edges_of(&self, node: &Node<N>) -> Result<Vec<&Edge<N, E>>> {
        Ok(self
            .incident_edges(node.id())?
            .into_iter()
            .filter(|e| e.kind() == EdgeKind::Undirected || e.start().id() == node.id())
            .collect())
    }

    /// Edges a traversal may enter `node` through: directed edges ending at
    /// `node` and undirected edges incident to it.
    pub fn incoming_edges_of(&self, node: &Node<N>) -> Result<Vec<&Edge<N, E>>> {
        Ok(self
            .incident_edges(node.id())?
            .into_iter()
            .filter(|e| e.kind() == EdgeKind::Undirected || e.end().id() == node.id())
            .collect())
    }

    /// Returns true if every edge carries `kind`.
    pub fn check_edge_kind(&self, kind: EdgeKind) -> bool {
        self.edges.values().all(|e| e.kind() == kind)
    }

    /// Edges incident to `node_id`, in id order.
    pub(crate) fn incident_edges(&self, node_id: &str) -> Result<Vec<&Edge<N, E>>> {
        self.incident_edge_ids(node_id)?
            .iter()
            .map(|eid| self.edge_by_id(eid))
            .collect()
    }

    /// `(edge, neighbour)` pairs a traversal may follow out of `node_id`.
    ///
    /// Pairs come in edge-id order, so traversals that consume them are
    /// deterministic.
    pub(crate) fn successors(
        &self,
        node_id: &str,
        direction: Direction,
    ) -> Result<Vec<(&Edge<N, E>, &Node<N>)>> {
        let mut out = Vec::new();
        for edge in self.incident_edges(node_id)? {
            if !follows(edge, node_id, direction) {
                continue;
            }
            if let Some(other) = edge.opposite(node_id) {
                out.push((edge, self.node(other.id())?));
            }
        }
        Ok(out)
    }

    /// `(edge id, neighbour id)` pairs out of `node_id`, in edge-id order.
    ///
    /// Yields nothing for an unknown node. Traversals that already hold ids
    /// taken from this graph use this instead of the fallible [`successors`].
    ///
    /// [`successors`]: Graph::successors
    pub(crate) fn successor_ids<'a>(
        &'a self,
        node_id: &'a str,
        direction: Direction,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.adjacency
            .get(node_id)
            .into_iter()
            .flatten()
            .filter_map(move |eid| self.edges.get(eid))
            .filter(move |e| follows(*e, node_id, direction))
            .filter_map(move |e| e.opposite(node_id).map(|o| (e.id(), o.id())))
    }

    /// Node lookup for ids already known to belong to this graph.
    pub(crate) fn node_entry(&self, id: &str) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    /// Edge lookup for ids already known to belong to this graph.
    pub(crate) fn edge_entry(&self, id: &str) -> Option<&Edge<N, E>> {
        self.edges.get(id)
    }

    /// Distinct neighbours of `node_id` under `direction`, in id order.
    pub(crate) fn neighbours_by(&self, node_id: &str, direction: Direction) -> Result<Vec<&Node<N>>> {
        let mut seen = BTreeMap::new();
        for (_, neighbour) in self.successors(node_id, direction)? {
            seen.entry(neighbour.id()).or_insert(neighbour);
        }
        Ok(seen.into_values().collect())
    }

    /// Consumes the graph, returning its parts.
    pub fn into_parts(self) -> (String, D, Vec<Node<N>>, Vec<Edge<N, E>>) {
        (
            self.id,
            self.data,
            self.nodes.into_values().collect(),
            self.edges.into_values().collect(),
        )
    }

    /// Re-validates the graph under another directionality policy.
    ///
    /// # Errors
    /// [`GraphError::EdgeKindMismatch`] if an edge is not accepted by `T2`.
    pub fn into_kind<T2: EdgeType>(self) -> Result<Graph<N, E, D, T2>> {
        if let Some(expected) = T2::required_kind() {
            if let Some(bad) = self.edges.values().find(|e| e.kind() != expected) {
                return Err(GraphError::EdgeKindMismatch {
                    edge: bad.id().to_owned(),
                    expected,
                    found: bad.kind(),
                });
            }
        }
        Ok(Graph {
            id: self.id,
            data: self.data,
            nodes: self.nodes,
            edges: self.edges,
            adjacency: self.adjacency,
            _marker: PhantomData,
        })
    }

    /// Drops the directionality policy; always succeeds.
    pub fn into_mixed(self) -> Graph<N, E, D, Mixed> {
        Graph {
            id: self.id,
            data: self.data,
            nodes: self.nodes,
            edges: self.edges,
            adjacency: self.adjacency,
            _marker: PhantomData,
        }
    }
}

impl<N: Clone, E: Clone, D: Clone, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Builds a new graph with a fresh id and this graph's payload.
    pub(crate) fn derive<I, J>(&self, nodes: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Node<N>>,
        J: IntoIterator<Item = Edge<N, E>>,
    {
        Self::with_random_id(self.data.clone(), nodes, edges)
    }

    /// The subgraph induced by `node_ids`: those nodes and every edge with
    /// both endpoints among them.
    ///
    /// # Errors
    /// [`GraphError::NodesNotInGraph`] if an id is not in the graph.
    pub fn induced_subgraph<'a, I>(&self, node_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keep: BTreeSet<&str> = node_ids.into_iter().collect();
        let missing: Vec<String> = keep
            .iter()
            .filter(|id| !self.nodes.contains_key(**id))
            .map(|id| (*id).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(GraphError::NodesNotInGraph(missing));
        }

        let nodes = keep.iter().filter_map(|id| self.nodes.get(*id)).cloned();
        let edges = self
            .edges
            .values()
            .filter(|e| keep.contains(e.start().id()) && keep.contains(e.end().id()))
            .cloned();
        self.derive(nodes, edges)
    }
}

/// Whether a traversal standing on `node_id` may cross `edge`.
fn follows<N, E>(edge: &Edge<N, E>, node_id: &str, direction: Direction) -> bool {
    match direction {
        Direction::Incident => true,
        Direction::Outgoing => edge.kind() == EdgeKind::Undirected || edge.start().id() == node_id,
    }
}

/// Builds the node id -> incident edge ids index.
pub(crate) fn build_adjacency<N, E>(
    nodes: &BTreeMap<String, Node<N>>,
    edges: &BTreeMap<String, Edge<N, E>>,
) -> AdjacencyIndex {
    let mut adjacency: AdjacencyIndex = nodes
        .keys()
        .map(|id| (id.clone(), BTreeSet::new()))
        .collect();
    for (eid, edge) in edges {
        for nid in edge.node_ids() {
            if let Some(incident) = adjacency.get_mut(nid) {
                incident.insert(eid.clone());
            }
        }
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: &str) -> Node {
        Node::bare(id)
    }

    fn path_graph() -> UndirectedGraph {
        let (n1, n2, n3, n4) = (n("n1"), n("n2"), n("n3"), n("n4"));
        let e1 = Edge::undirected("e1", n1.clone(), n2.clone(), ());
        let e2 = Edge::undirected("e2", n2.clone(), n3.clone(), ());
        Graph::new("g1", (), [n1, n2, n3, n4], [e1, e2]).unwrap()
    }

    #[test]
    fn adjacency_matches_incidence() {
        let g = path_graph();
        assert_eq!(g.incident_edge_ids("n1").unwrap().len(), 1);
        assert_eq!(g.incident_edge_ids("n2").unwrap().len(), 2);
        assert!(g.incident_edge_ids("n4").unwrap().is_empty());
        assert!(g.validate_invariants());
    }

    #[test]
    fn rejects_dangling_edge() {
        let (a, b) = (n("a"), n("b"));
        let err = Graph::<(), (), (), Mixed>::new(
            "g",
            (),
            [a.clone()],
            [Edge::undirected("ab", a, b, ())],
        )
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingEdge {
                edge: "ab".into(),
                node: "b".into()
            }
        );
    }

    #[test]
    fn rejects_wrong_edge_kind() {
        let (a, b) = (n("a"), n("b"));
        let err = UndirectedGraph::new(
            "g",
            (),
            [a.clone(), b.clone()],
            [Edge::directed("ab", a, b, ())],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GraphError::EdgeKindMismatch {
                expected: EdgeKind::Undirected,
                found: EdgeKind::Directed,
                ..
            }
        ));
    }

    #[test]
    fn lookups_fail_with_not_found() {
        let g = path_graph();
        assert_eq!(
            g.node("zz").unwrap_err(),
            GraphError::NodeNotInGraph("zz".into())
        );
        assert_eq!(
            g.edge_by_id("e9").unwrap_err(),
            GraphError::EdgeNotFound("e9".into())
        );
        assert!(matches!(
            g.edge_by_vertices(&n("n1"), &n("n3")).unwrap_err(),
            GraphError::NoEdgeBetween { .. }
        ));
        assert_eq!(g.edge_by_vertices(&n("n2"), &n("n1")).unwrap().id(), "e1");
    }

    #[test]
    fn neighbours_exclude_self_without_loop() {
        let g = path_graph();
        let ids: Vec<_> = g.neighbours_of(&n("n2")).unwrap().iter().map(|x| x.id()).collect();
        assert_eq!(ids, ["n1", "n3"]);
        assert!(g.neighbours_of(&n("n4")).unwrap().is_empty());

        let a = n("a");
        let looped = UndirectedGraph::new("l", (), [a.clone()], [Edge::undirected("aa", a.clone(), a.clone(), ())]).unwrap();
        let ids: Vec<_> = looped.neighbours_of(&a).unwrap().iter().map(|x| x.id()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn node_is_own_neighbour_only_through_self_loop() {
        let g = path_graph();
        assert!(!g.is_neighbour_of(&n("n2"), &n("n2")).unwrap());
        assert!(g.is_neighbour_of(&n("n2"), &n("n1")).unwrap());
        assert!(!g.is_neighbour_of(&n("n1"), &n("n3")).unwrap());

        let (a, b) = (n("a"), n("b"));
        let looped = UndirectedGraph::new(
            "l",
            (),
            [a.clone(), b.clone()],
            [
                Edge::undirected("aa", a.clone(), a.clone(), ()),
                Edge::undirected("ab", a.clone(), b.clone(), ()),
            ],
        )
        .unwrap();
        assert!(looped.is_neighbour_of(&a, &a).unwrap());
        assert!(!looped.is_neighbour_of(&b, &b).unwrap());
        assert!(looped.is_neighbour_of(&a, &b).unwrap());
        assert!(g.is_neighbour_of(&n("zz"), &n("zz")).is_err());
    }

    #[test]
    fn membership_and_incident_edge_lookups() {
        let g = path_graph();
        assert!(g.is_in(&n("n4")));
        assert!(!g.is_in(&n("zz")));

        assert!(g.contains_vertices([&n("n1"), &n("n3")]));
        assert!(!g.contains_vertices([&n("n1"), &n("zz")]));
        assert!(g.contains_vertices(std::iter::empty::<&Node>()));

        let ids: Vec<_> = g.edges_of(&n("n2")).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(ids, ["e1", "e2"]);
        assert!(g.edges_of(&n("n4")).unwrap().is_empty());
        assert_eq!(
            g.edges_of(&n("zz")).unwrap_err(),
            GraphError::NodeNotInGraph("zz".into())
        );
    }

    #[test]
    fn outgoing_and_incoming_respect_orientation() {
        let (a, b, c) = (n("a"), n("b"), n("c"));
        let g = Graph::<(), (), (), Directed>::new(
            "d",
            (),
            [a.clone(), b.clone(), c.clone()],
            [
                Edge::directed("ab", a.clone(), b.clone(), ()),
                Edge::directed("cb", c.clone(), b.clone(), ()),
            ],
        )
        .unwrap();
        assert_eq!(g.outgoing_edges_of(&a).unwrap().len(), 1);
        assert!(g.outgoing_edges_of(&b).unwrap().is_empty());
        assert_eq!(g.incoming_edges_of(&b).unwrap().len(), 2);
        let succ: Vec<_> = g
            .neighbours_by("b", Direction::Outgoing)
            .unwrap()
            .iter()
            .map(|x| x.id())
            .collect();
        assert!(succ.is_empty());
    }

    #[test]
    fn induced_subgraph_drops_crossing_edges() {
        let g = path_graph();
        let sub = g.induced_subgraph(["n1", "n2", "n4"]).unwrap();
        assert_eq!(sub.nb_nodes(), 3);
        assert_eq!(sub.edge_ids().collect::<Vec<_>>(), ["e1"]);
        assert_ne!(sub.id(), g.id());
        assert!(matches!(
            g.induced_subgraph(["n1", "x"]).unwrap_err(),
            GraphError::NodesNotInGraph(missing) if missing == ["x"]
        ));
    }

    #[test]
    fn into_kind_revalidates() {
        let (a, b) = (n("a"), n("b"));
        let mixed = Graph::<(), (), (), Mixed>::new(
            "m",
            (),
            [a.clone(), b.clone()],
            [Edge::directed("ab", a, b, ())],
        )
        .unwrap();
        assert!(mixed.clone().into_kind::<Undirected>().is_err());
        let directed = mixed.into_kind::<Directed>().unwrap();
        assert!(directed.check_edge_kind(EdgeKind::Directed));
    }
}
