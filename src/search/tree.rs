//! Arena-based search tree.
//!
//! Nodes are stored in a flat vector and referenced by `NodeId` indices.
//! The tree is rebuilt for every deepening iteration and cleared once a
//! decision is made.

use super::node::{NodeId, SearchNode};
use crate::core::{MatchState, PlayerId};

#[derive(Clone, Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the tree and start over from `state`.
    pub fn reset(&mut self, state: MatchState, player: PlayerId) -> NodeId {
        self.nodes.clear();
        self.nodes.push(SearchNode::root(state, player));
        NodeId::new(0)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Root node ID. Only meaningful after `reset`.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Principal variation from the root, following `best` links.
    pub fn principal_variation(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        if self.nodes.is_empty() {
            return path;
        }
        let mut current = self.get(self.root()).best;
        while !current.is_none() {
            path.push(current);
            current = self.get(current).best;
        }
        path
    }

    /// Principal variation rendered as text, e.g.
    /// `"P0: play Knight #3 to Slot(1) > P0: end turn"`.
    pub fn node_path(&self) -> String {
        self.principal_variation()
            .into_iter()
            .filter_map(|id| {
                let node = self.get(id);
                let action = node.action?;
                let before = &self.get(node.parent).state;
                Some(format!("P{}: {}", node.actor.0, action.describe(before)))
            })
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
