//! Internal traversal building blocks.
//!
//! Shared by the searcher and the composite algorithms so visitation logic
//! lives in one place.

pub(crate) mod visited;

pub use visited::VisitState;
