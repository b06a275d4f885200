//! Per-traversal visitation state.
//!
//! Every search owns its own state value; nothing here is shared between
//! traversals. Nodes are tracked by borrowed id, so the state lives no longer
//! than the graph it walks.

use std::collections::HashMap;
use std::collections::HashSet;

/// Set of node ids already reached by a traversal.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet<'g> {
    marked: HashSet<&'g str>,
}

impl<'g> VisitedSet<'g> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            marked: HashSet::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: &'g str) -> bool {
        self.marked.insert(node)
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: &str) -> bool {
        self.marked.contains(node)
    }
}

/// Depth-first state of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitState {
    /// Not reached yet.
    Unvisited,
    /// Reached; some descendants may still be unexplored.
    Discovered,
    /// Reached and every descendant explored.
    Finished,
}

/// Three-state flags for depth-first traversals.
#[derive(Debug, Default)]
pub(crate) struct VisitFlags<'g> {
    states: HashMap<&'g str, VisitState>,
}

impl<'g> VisitFlags<'g> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, node: &str) -> VisitState {
        self.states
            .get(node)
            .copied()
            .unwrap_or(VisitState::Unvisited)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, node: &'g str, state: VisitState) {
        self.states.insert(node, state);
    }
}
