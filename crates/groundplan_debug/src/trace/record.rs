//! Trace event and record types.

use groundplan_engine::{NodeId, Strategy};

/// Events recorded during a search run.
///
/// These mirror the [`groundplan_engine::SearchObserver`] callbacks
/// one-to-one.
#[derive(Clone, Debug)]
pub enum TraceEvent {
    /// A search run began.
    SearchStarted {
        /// The strategy being run.
        strategy: Strategy,
    },

    /// A node was taken up for expansion.
    NodeExpanded {
        /// The expanded node.
        node: NodeId,
        /// Its depth from the root.
        depth: usize,
    },

    /// A rule was tested against a node's state.
    RuleTried {
        /// The node whose state was tested.
        node: NodeId,
        /// Index of the rule in the problem's rule list.
        rule: usize,
        /// Whether the preconditions held.
        applicable: bool,
    },

    /// A new node entered the graph.
    NodeAdded {
        /// The new node.
        node: NodeId,
        /// Its parent.
        parent: NodeId,
        /// The producing rule index.
        rule: usize,
    },

    /// A successor was discarded as a duplicate of an existing node.
    DuplicateDiscarded {
        /// The pre-existing equivalent node.
        node: NodeId,
        /// The rule whose successor was discarded.
        rule: usize,
    },

    /// The backtracking cursor retreated to a parent.
    Backtracked {
        /// The abandoned node.
        from: NodeId,
        /// The node the cursor moved to.
        to: NodeId,
        /// The next rule index to try there.
        resume_from: usize,
    },

    /// A goal-satisfying node was found.
    GoalReached {
        /// The solution node.
        node: NodeId,
    },

    /// The search run ended.
    SearchFinished {
        /// Whether a plan was found.
        success: bool,
    },
}

impl TraceEvent {
    /// Returns a stable kebab-case name for the event kind.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SearchStarted { .. } => "search-started",
            Self::NodeExpanded { .. } => "node-expanded",
            Self::RuleTried { .. } => "rule-tried",
            Self::NodeAdded { .. } => "node-added",
            Self::DuplicateDiscarded { .. } => "duplicate-discarded",
            Self::Backtracked { .. } => "backtracked",
            Self::GoalReached { .. } => "goal-reached",
            Self::SearchFinished { .. } => "search-finished",
        }
    }
}

/// A recorded event with its sequence id and timestamp.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Monotonic sequence id, unique within a tracer.
    pub id: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The recorded event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Returns the event kind name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
