//! Error types for graph construction, lookup and indexing.
//!
//! Negative algorithmic answers ("no path", "no cycle", "disconnected") are not
//! errors; those come back as `Option::None` from the algorithm entry points.

use thiserror::Error;

use crate::graph::EdgeKind;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    // ========== Lookup Errors ==========
    /// The requested node id is not a member of the graph.
    #[error("node '{0}' is not in graph")]
    NodeNotInGraph(String),

    /// The requested edge id is not a member of the graph.
    #[error("edge '{0}' not found in graph")]
    EdgeNotFound(String),

    /// No edge connects the two given nodes.
    #[error("no edge between '{start}' and '{end}'")]
    NoEdgeBetween {
        /// First node id.
        start: String,
        /// Second node id.
        end: String,
    },

    // ========== Construction Errors ==========
    /// An edge references an endpoint that is not in the node set.
    #[error("edge '{edge}' references node '{node}' which is not in the node set")]
    DanglingEdge {
        /// Offending edge id.
        edge: String,
        /// Missing endpoint id.
        node: String,
    },

    /// An edge has the wrong kind for the graph variant being built.
    #[error("edge '{edge}' is {found} but the graph only accepts {expected} edges")]
    EdgeKindMismatch {
        /// Offending edge id.
        edge: String,
        /// Kind the graph variant requires.
        expected: EdgeKind,
        /// Kind the edge carries.
        found: EdgeKind,
    },

    // ========== Precondition Errors ==========
    /// A node-set argument contains nodes that are absent from the graph.
    #[error("node set is not contained in graph, missing: {0:?}")]
    NodesNotInGraph(Vec<String>),

    // ========== Index Errors ==========
    /// Building a derived index over an already-valid graph failed.
    #[error("failed to build graph index: {0}")]
    IndexBuild(Box<GraphError>),
}

impl GraphError {
    /// Returns true for the "not found" family of lookup failures.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotInGraph(_)
                | GraphError::EdgeNotFound(_)
                | GraphError::NoEdgeBetween { .. }
        )
    }

    /// Returns true for errors raised while validating a node/edge set.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            GraphError::DanglingEdge { .. } | GraphError::EdgeKindMismatch { .. }
        )
    }
}
