//! Algorithms built on the search primitives.
//!
//! Everything here is exposed as inherent methods on [`Graph`],
//! [`UndirectedGraph`] and [`DiGraph`]; the submodules only group the
//! implementations. Every algorithm reads its input and returns fresh values:
//! derived graphs (spanning trees, closures) get new random ids.
//!
//! [`Graph`]: crate::graph::Graph
//! [`UndirectedGraph`]: crate::graph::UndirectedGraph
//! [`DiGraph`]: crate::graph::DiGraph

mod closure;
mod components;
mod cycle;
mod shortest_path;
mod spanning_tree;

pub use components::Components;
pub use spanning_tree::SpanningTree;
