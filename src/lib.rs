//! # `gmodels` - Graph Substrate for Graphical Models
//!
//! An immutable graph data model and a suite of classical graph algorithms,
//! intended as the layer on which factors and random variables are later
//! composed.
//!
//! ## Data Model
//!
//! - [`Node`] and [`Edge`] are identified by string ids and carry opaque
//!   payloads. Equality, hashing and ordering use the id alone.
//! - [`Graph`] owns id-keyed node and edge sets plus an adjacency index
//!   (node id -> incident edge ids) derived once at construction.
//! - The directionality policy is a marker type: [`Undirected`] and
//!   [`Directed`] reject edges of the other kind at construction, [`Mixed`]
//!   accepts both.
//! - [`DiGraph`] wraps a directed graph with a reachability index and cycle
//!   information, computed in an explicit [`DiGraph::index`] phase.
//!
//! Graphs never change after construction. Operations that produce a graph
//! (subtraction, spanning trees, closures) build a new one with a fresh id.
//!
//! ## Algorithms
//!
//! | Area | Entry points |
//! |------|--------------|
//! | Traversal | [`GraphSearcher`]: BFS, DFS forest, uniform-cost search |
//! | Statistics | [`GraphAnalyzer`]: degrees, ratios, stability |
//! | Set algebra | [`GraphSetOps`]: union, intersection, subtract, add |
//! | Paths | [`Graph::find_shortest_path`], [`Graph::check_for_path`] |
//! | Connectivity | [`UndirectedGraph::find_connected_components`] |
//! | Spanning trees | [`UndirectedGraph::minimum_spanning_tree_by`] |
//! | Cycles | [`Graph::find_cycle`], [`DiGraph::has_cycle`] |
//! | Closure | [`DiGraph::transitive_closure`] |
//!
//! Iteration over nodes and edges is always in id order, so every result is
//! reproducible.
//!
//! ## Features
//!
//! - `parallel`: builds per-node reachability with `rayon`
//!   (`DiGraph::index_parallel`).
//!
//! ## Example
//!
//! ```rust
//! use gmodels::{Edge, Node, UndirectedGraph};
//!
//! let (a, b, c) = (Node::bare("a"), Node::bare("b"), Node::bare("c"));
//! let g = UndirectedGraph::new(
//!     "g",
//!     (),
//!     [a.clone(), b.clone(), c.clone()],
//!     [
//!         Edge::undirected("ab", a.clone(), b.clone(), ()),
//!         Edge::undirected("bc", b, c.clone(), ()),
//!     ],
//! )?;
//!
//! let path = g.find_shortest_path(&a, &c)?.expect("connected");
//! assert_eq!(path.node_ids(), ["a", "b", "c"]);
//! assert_eq!(g.find_connected_components().len(), 1);
//! assert!(!g.has_cycle());
//! # Ok::<(), gmodels::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    BackEdge, BreadthFirstTree, Cycle, DfsForest, DiGraph, Directed, Direction, Edge, EdgeKind,
    EdgeType, Graph, GraphAnalyzer, GraphElement, GraphSearcher, GraphSetOps, GraphSnapshot, Mixed,
    Node, Path, ReachabilitySet, SpanningTree, Undirected, UndirectedGraph, VisitState,
};
