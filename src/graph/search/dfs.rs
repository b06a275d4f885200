//! Depth-first forest with discovery/finish stamping.
//!
//! The walk uses an explicit stack of `(node, neighbour position)` frames
//! instead of recursion, so call depth does not grow with path length. The
//! stamps are the same as the recursive formulation: one logical clock,
//! incremented on every discovery and every finish.

use std::collections::BTreeMap;

use super::GraphSearcher;
use crate::graph::access::visited::{VisitFlags, VisitState};
use crate::graph::basic::EdgeType;

/// An edge closing a cycle: `descendant` reaches `ancestor`, which was still
/// discovered but unfinished, through `edge`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackEdge {
    /// The ancestor the edge points back to.
    pub ancestor: String,
    /// The node being explored when the edge was found.
    pub descendant: String,
    /// The closing edge's id.
    pub edge: String,
}

/// Result of a depth-first walk over every component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DfsForest {
    discovery: BTreeMap<String, usize>,
    finish: BTreeMap<String, usize>,
    predecessor: BTreeMap<String, (String, String)>,
    roots: Vec<String>,
    back_edge: Option<BackEdge>,
}

impl DfsForest {
    /// Clock value at which `node_id` was discovered.
    pub fn discovery(&self, node_id: &str) -> Option<usize> {
        self.discovery.get(node_id).copied()
    }

    /// Clock value at which `node_id` was finished.
    pub fn finish(&self, node_id: &str) -> Option<usize> {
        self.finish.get(node_id).copied()
    }

    /// Tree parent of `node_id`; `None` for roots.
    pub fn predecessor(&self, node_id: &str) -> Option<&str> {
        self.predecessor.get(node_id).map(|(p, _)| p.as_str())
    }

    /// Id of the tree edge `node_id` was discovered through.
    pub fn tree_edge(&self, node_id: &str) -> Option<&str> {
        self.predecessor.get(node_id).map(|(_, e)| e.as_str())
    }

    /// Roots of the depth-first trees, one per traversal start, in id order.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// First back edge found, if the walk checked for cycles.
    pub fn back_edge(&self) -> Option<&BackEdge> {
        self.back_edge.as_ref()
    }

    /// Returns true if a back edge was found.
    pub fn has_back_edge(&self) -> bool {
        self.back_edge.is_some()
    }

    /// State of `node_id` after the walk.
    pub fn state(&self, node_id: &str) -> VisitState {
        if self.finish.contains_key(node_id) {
            VisitState::Finished
        } else if self.discovery.contains_key(node_id) {
            VisitState::Discovered
        } else {
            VisitState::Unvisited
        }
    }

    /// Node ids by decreasing finish time.
    ///
    /// For a directed acyclic graph this is a topological order.
    pub fn reverse_finish_order(&self) -> Vec<&str> {
        let mut by_finish: Vec<(&str, usize)> =
            self.finish.iter().map(|(id, &t)| (id.as_str(), t)).collect();
        by_finish.sort_by(|a, b| b.1.cmp(&a.1));
        by_finish.into_iter().map(|(id, _)| id).collect()
    }
}

/// One pending node on the explicit DFS stack.
struct Frame<'g> {
    node: &'g str,
    via: Option<&'g str>,
    successors: Vec<(&'g str, &'g str)>,
    next: usize,
}

/// State owned by a single depth-first walk.
struct DfsContext<'g> {
    clock: usize,
    flags: VisitFlags<'g>,
    forest: DfsForest,
    check_cycle: bool,
}

impl<'g> DfsContext<'g> {
    fn discover(&mut self, node: &'g str) {
        self.clock += 1;
        self.flags.mark(node, VisitState::Discovered);
        self.forest.discovery.insert(node.to_owned(), self.clock);
    }

    fn finish(&mut self, node: &'g str) {
        self.clock += 1;
        self.flags.mark(node, VisitState::Finished);
        self.forest.finish.insert(node.to_owned(), self.clock);
    }
}

impl<'g, N, E, D, Ty: EdgeType> GraphSearcher<'g, N, E, D, Ty> {
    /// Depth-first walk over every component, roots taken in id order.
    ///
    /// With `check_cycle`, the first edge leading from the node under
    /// exploration to an ancestor that is still discovered (other than the
    /// tree edge the node was entered through) is recorded as a
    /// [`BackEdge`]. The walk always completes, so every node is stamped.
    pub fn depth_first_forest(&self, check_cycle: bool) -> DfsForest {
        let graph = self.graph;
        let mut ctx = DfsContext {
            clock: 0,
            flags: VisitFlags::with_capacity(graph.nb_nodes()),
            forest: DfsForest::default(),
            check_cycle,
        };

        let mut stack: Vec<Frame<'g>> = Vec::new();
        for root in graph.node_ids() {
            if ctx.flags.get(root) != VisitState::Unvisited {
                continue;
            }
            ctx.forest.roots.push(root.to_owned());
            ctx.discover(root);
            stack.push(self.frame(root, None));

            while let Some(top) = stack.last_mut() {
                let Some(&(eid, v)) = top.successors.get(top.next) else {
                    let done = top.node;
                    stack.pop();
                    ctx.finish(done);
                    continue;
                };
                top.next += 1;
                let (u, via) = (top.node, top.via);

                match ctx.flags.get(v) {
                    VisitState::Unvisited => {
                        ctx.forest
                            .predecessor
                            .insert(v.to_owned(), (u.to_owned(), eid.to_owned()));
                        ctx.discover(v);
                        stack.push(self.frame(v, Some(eid)));
                    }
                    VisitState::Discovered => {
                        if ctx.check_cycle && ctx.forest.back_edge.is_none() && via != Some(eid) {
                            tracing::debug!(ancestor = v, descendant = u, edge = eid, "back edge");
                            ctx.forest.back_edge = Some(BackEdge {
                                ancestor: v.to_owned(),
                                descendant: u.to_owned(),
                                edge: eid.to_owned(),
                            });
                        }
                    }
                    VisitState::Finished => {}
                }
            }
        }

        ctx.forest
    }

    fn frame(&self, node: &'g str, via: Option<&'g str>) -> Frame<'g> {
        Frame {
            node,
            via,
            successors: self.graph.successor_ids(node, self.direction).collect(),
            next: 0,
        }
    }
}
