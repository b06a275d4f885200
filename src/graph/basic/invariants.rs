//! Structural invariant checks for [`Graph`].
//!
//! Constructors run these under `debug_assert!`, keeping release builds
//! unaffected; property tests call them directly.

use std::collections::BTreeSet;

use super::graph::{EdgeType, Graph};

/// Logs a violated invariant and passes the condition through.
#[inline(always)]
fn invariant_holds(condition: bool, message: &str) -> bool {
    if !condition {
        tracing::error!(invariant = message, "graph invariant violated");
    }
    condition
}

impl<N, E, D, Ty: EdgeType> Graph<N, E, D, Ty> {
    /// Validates the graph's structural invariants.
    ///
    /// This method checks that:
    /// 1. Every edge endpoint is in the node set
    /// 2. Every edge carries the kind required by `Ty`
    /// 3. The adjacency index has exactly one entry per node
    /// 4. For each node, the index equals the ids of edges incident to it
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        for edge in self.edges() {
            if !invariant_holds(
                self.node(edge.start().id()).is_ok() && self.node(edge.end().id()).is_ok(),
                "edge endpoints must be graph nodes",
            ) {
                return false;
            }
            if let Some(kind) = Ty::required_kind() {
                if !invariant_holds(edge.kind() == kind, "edge kind must match graph type") {
                    return false;
                }
            }
        }

        if !invariant_holds(
            self.adjacency().len() == self.nb_nodes()
                && self.node_ids().all(|id| self.adjacency().contains_key(id)),
            "adjacency index must cover exactly the node set",
        ) {
            return false;
        }

        for node in self.nodes() {
            let derived: BTreeSet<&str> = self
                .edges()
                .filter(|e| e.is_incident_to(node.id()))
                .map(|e| e.id())
                .collect();
            let indexed: BTreeSet<&str> = self
                .adjacency()
                .get(node.id())
                .map(|ids| ids.iter().map(String::as_str).collect())
                .unwrap_or_default();
            if !invariant_holds(derived == indexed, "adjacency must equal derived incidence") {
                return false;
            }
        }

        true
    }
}
