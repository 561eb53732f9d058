//! The search graph arena.
//!
//! Every search owns one [`SearchGraph`]: an append-only arena of
//! [`SearchNode`]s addressed by integer [`NodeId`] handles. Nodes are
//! immutable once created; a rule application always produces a new node
//! and never mutates an existing one. Backtracking retires branches by
//! moving its cursor, not by truncating the arena, so `len()` is the
//! count of states ever generated.

use std::fmt;

use groundplan_foundation::FactSet;

/// Handle to a node in a [`SearchGraph`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A state plus its provenance within one search run.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// The fact set this node represents.
    state: FactSet,
    /// Parent node; `None` for the root.
    parent: Option<NodeId>,
    /// Index of the rule that produced this node; `None` for the root.
    via: Option<usize>,
    /// Distance from the root in rule applications.
    depth: usize,
}

impl SearchNode {
    /// Returns the state of this node.
    #[must_use]
    pub fn state(&self) -> &FactSet {
        &self.state
    }

    /// Returns the parent node id, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the index of the producing rule, if any.
    #[must_use]
    pub fn via(&self) -> Option<usize> {
        self.via
    }

    /// Returns the depth of this node (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if this is the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only arena of search nodes.
pub struct SearchGraph {
    nodes: Vec<SearchNode>,
}

impl SearchGraph {
    /// Creates a graph holding only the root node.
    #[must_use]
    pub fn with_root(state: FactSet) -> Self {
        Self {
            nodes: vec![SearchNode {
                state,
                parent: None,
                via: None,
                depth: 0,
            }],
        }
    }

    /// Returns the root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns false; a graph always holds at least the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Appends a child node and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn push(&mut self, state: FactSet, parent: NodeId, via: usize) -> NodeId {
        let depth = self.node(parent).depth + 1;
        let id = u32::try_from(self.nodes.len()).expect("search graph exceeds u32 nodes");
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            via: Some(via),
            depth,
        });
        NodeId(id)
    }

    /// Finds a node whose state is set-equal to `state`.
    ///
    /// This is the deduplication check: linear scan with set equality,
    /// never reference equality.
    #[must_use]
    pub fn find_equivalent(&self, state: &FactSet) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.state == *state)
            .map(|idx| NodeId(u32::try_from(idx).expect("search graph exceeds u32 nodes")))
    }

    /// Iterates over all node handles in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(|idx| NodeId(u32::try_from(idx).expect("graph index overflow")))
    }
}
