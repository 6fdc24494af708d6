//! Search node structures.
//!
//! Uses arena-based allocation with index references (NodeId), as the tree
//! stores thousands of nodes per decision.

use smallvec::SmallVec;

use crate::core::{Action, MatchState, PlayerId};

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A hypothetical position in the search.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// State after `action` was applied.
    pub state: MatchState,

    /// Action that led here (None for root).
    pub action: Option<Action>,

    /// Player who took `action`.
    pub actor: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Backed-up minimax score.
    pub score: f64,

    /// Child with the best backed-up score (NONE if unexpanded).
    pub best: NodeId,

    /// Explored children, in search order.
    pub children: SmallVec<[NodeId; 8]>,
}

impl SearchNode {
    pub fn new(parent: NodeId, state: MatchState, action: Action, actor: PlayerId, depth: u16) -> Self {
        Self {
            parent,
            state,
            action: Some(action),
            actor,
            depth,
            score: 0.0,
            best: NodeId::NONE,
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(state: MatchState, player: PlayerId) -> Self {
        Self {
            parent: NodeId::NONE,
            state,
            action: None,
            actor: player,
            depth: 0,
            score: 0.0,
            best: NodeId::NONE,
            children: SmallVec::new(),
        }
    }
}
