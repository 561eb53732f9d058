//! The search observer seam.
//!
//! All strategies report their progress through a [`SearchObserver`]
//! injected by the caller. This replaces parallel "verbose" copies of
//! each algorithm with a single implementation whose trace points are
//! well defined: expansion, rule trial, node creation, duplicate
//! discard, backtrack, and termination.

use crate::graph::NodeId;
use crate::strategy::Strategy;

/// Callbacks invoked at well-defined points during a search.
///
/// Every method has an empty default body, so implementors only override
/// the events they care about. Observers must not assume any call
/// ordering beyond: `search_started` first, `search_finished` last.
pub trait SearchObserver {
    /// A search run has begun.
    fn search_started(&mut self, _strategy: Strategy) {}

    /// A node has been taken up for expansion.
    fn node_expanded(&mut self, _node: NodeId, _depth: usize) {}

    /// A rule was tested against a node's state.
    fn rule_tried(&mut self, _node: NodeId, _rule: usize, _applicable: bool) {}

    /// A new node entered the graph.
    fn node_added(&mut self, _node: NodeId, _parent: NodeId, _rule: usize) {}

    /// A successor state was discarded because an equivalent node exists.
    fn duplicate_discarded(&mut self, _node: NodeId, _rule: usize) {}

    /// The backtracking cursor moved from a dead end to its parent.
    fn backtracked(&mut self, _from: NodeId, _to: NodeId, _resume_from: usize) {}

    /// A goal-satisfying node was found.
    fn goal_reached(&mut self, _node: NodeId) {}

    /// The search run has ended.
    fn search_finished(&mut self, _success: bool) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
