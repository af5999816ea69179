// SPDX-License-Identifier: MPL-2.0
//! A snack placed in a presentation queue.
//!
//! Nodes live in the queue's arena and refer to their neighbors through
//! [`NodeId`]s. The links never own anything: they only tell the layout
//! engine which node a snack stacks against.

use crate::animation::Motion;
use crate::config::defaults::DEFAULT_SNACK_HEIGHT;
use crate::snack::{Alignment, Snack};

/// Generation-checked index of a node in its queue's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// What an anchor attaches a node's leading edge to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorTarget {
    /// The container edge the stack grows from.
    ContainerEdge,
    /// The far side of another node (its bottom for top-aligned stacks, its
    /// top for bottom-aligned ones).
    FarSide(NodeId),
    /// Just past the container edge, out of view.
    OffScreen,
}

/// Layout binding of one node edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub target: AnchorTarget,
    pub spacing: f32,
}

impl Anchor {
    #[must_use]
    pub fn container_edge() -> Self {
        Self {
            target: AnchorTarget::ContainerEdge,
            spacing: 0.0,
        }
    }

    #[must_use]
    pub fn after(node: NodeId, spacing: f32) -> Self {
        Self {
            target: AnchorTarget::FarSide(node),
            spacing,
        }
    }

    #[must_use]
    pub fn off_screen() -> Self {
        Self {
            target: AnchorTarget::OffScreen,
            spacing: 0.0,
        }
    }
}

/// Where a node is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePhase {
    AnimatingIn,
    Visible,
    Rearranging,
    AnimatingOut,
}

/// Operation whose completion a node still owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Insert,
    Rearrange,
    Remove,
}

#[derive(Debug, Clone)]
pub struct PresentationNode {
    pub(crate) snack: Snack,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) top_binding: Option<Anchor>,
    pub(crate) bottom_binding: Option<Anchor>,
    pub(crate) phase: NodePhase,
    pub(crate) pending: Option<TransitionKind>,
    pub(crate) height: f32,
    pub(crate) offset: Motion,
    pub(crate) opacity: Motion,
    pub(crate) z_index: u32,
}

impl PresentationNode {
    pub(crate) fn new(snack: Snack, z_index: u32) -> Self {
        Self {
            snack,
            previous: None,
            next: None,
            top_binding: None,
            bottom_binding: None,
            phase: NodePhase::AnimatingIn,
            pending: Some(TransitionKind::Insert),
            height: DEFAULT_SNACK_HEIGHT,
            offset: Motion::Resting(0.0),
            opacity: Motion::Resting(1.0),
            z_index,
        }
    }

    #[must_use]
    pub fn snack(&self) -> &Snack {
        &self.snack
    }

    #[must_use]
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    #[must_use]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[must_use]
    pub fn phase(&self) -> NodePhase {
        self.phase
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[must_use]
    pub fn top_binding(&self) -> Option<Anchor> {
        self.top_binding
    }

    #[must_use]
    pub fn bottom_binding(&self) -> Option<Anchor> {
        self.bottom_binding
    }

    /// The binding that positions this node in a stack of `alignment`.
    #[must_use]
    pub fn binding(&self, alignment: Alignment) -> Option<Anchor> {
        match alignment {
            Alignment::Top => self.top_binding,
            Alignment::Bottom => self.bottom_binding,
        }
    }

    pub(crate) fn set_binding(&mut self, alignment: Alignment, anchor: Option<Anchor>) {
        match alignment {
            Alignment::Top => self.top_binding = anchor,
            Alignment::Bottom => self.bottom_binding = anchor,
        }
    }

    /// Distance the node must travel past the container edge to be hidden,
    /// shadow included.
    pub(crate) fn rest_extent(&self, alignment: Alignment) -> f32 {
        let extent = self.snack.style().elevation.extent();
        match alignment {
            Alignment::Top => extent.bottom,
            Alignment::Bottom => extent.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_owes_an_insert() {
        let node = PresentationNode::new(Snack::new("a"), 0);
        assert_eq!(node.phase(), NodePhase::AnimatingIn);
        assert_eq!(node.pending, Some(TransitionKind::Insert));
        assert!(node.previous().is_none());
        assert!(node.next().is_none());
    }

    #[test]
    fn binding_follows_alignment() {
        let mut node = PresentationNode::new(Snack::new("a"), 0);
        node.set_binding(Alignment::Bottom, Some(Anchor::container_edge()));
        assert!(node.top_binding().is_none());
        assert_eq!(
            node.binding(Alignment::Bottom),
            Some(Anchor::container_edge())
        );
    }
}
