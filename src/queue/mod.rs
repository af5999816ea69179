// SPDX-License-Identifier: MPL-2.0
//! Linked-list layout engine for one alignment group.
//!
//! A [`PresentationQueue`] keeps the snacks of one alignment in a doubly
//! linked list whose nodes live in a generation-checked arena. Every node
//! anchors its leading edge either to the container edge or to the far side
//! of its predecessor, so inserting, removing or promoting a node only
//! touches its immediate neighbors.
//!
//! # Order
//!
//! The *physical* order (`order`) is the order nodes appear on screen, top
//! to bottom:
//!
//! - `Top`: oldest first, the latest node sits at the end.
//! - `Bottom`: latest first, the oldest node sits at the end.
//!
//! The *logical* order exposed by [`PresentationQueue::snacks`] is always
//! oldest first. A logical index `i` maps to physical index `i` for `Top`
//! and `len - 1 - i` for `Bottom`.
//!
//! # Transitions
//!
//! Operations never call back. They record what each node still owes in
//! its `pending` field and [`PresentationQueue::tick`] turns finished
//! transitions into [`QueueEvent`]s. A later operation on the same node
//! overwrites the pending kind, so each node settles at most once per
//! operation that is still current.

mod node;

pub use node::{Anchor, AnchorTarget, NodeId, NodePhase, PresentationNode, TransitionKind};

use crate::animation::{AnimationSpec, Motion, Transition};
use crate::config::AppearanceConfig;
use crate::snack::{Alignment, Snack, SnackIdentity};
use crate::surface::DisplaySurface;
use std::time::Instant;

/// Something observable that happened while operating or ticking the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueEvent {
    /// The container was attached to the surface.
    Attached,
    /// The surface refused the container; nodes are tracked but not shown.
    SurfaceUnavailable,
    /// A node finished its insert or rearrange transition.
    Settled { snack: Snack, kind: TransitionKind },
    /// A removed node finished animating out and left the arena.
    Discarded { snack: Snack },
    /// The last node is gone and the container was detached.
    Detached,
}

/// Where a node is drawn at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct NodeFrame<'a> {
    pub id: NodeId,
    pub snack: &'a Snack,
    /// Distance from the container edge, negative when off-screen.
    pub offset: f32,
    pub opacity: f32,
    pub height: f32,
    pub z_index: u32,
    pub phase: NodePhase,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<PresentationNode>,
}

/// Ordered collection of presentation nodes for one alignment.
#[derive(Debug)]
pub struct PresentationQueue {
    alignment: Alignment,
    appearance: AppearanceConfig,
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Live nodes, in physical order.
    order: Vec<NodeId>,
    /// Removed nodes still animating out.
    departing: Vec<NodeId>,
    attached: bool,
    /// Width of the display surface, once the host reported it.
    surface_width: Option<f32>,
    next_z: u32,
    events: Vec<QueueEvent>,
}

impl PresentationQueue {
    #[must_use]
    pub fn new(alignment: Alignment, appearance: AppearanceConfig) -> Self {
        Self {
            alignment,
            appearance,
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            departing: Vec::new(),
            attached: false,
            surface_width: None,
            next_z: 0,
            events: Vec::new(),
        }
    }

    /// Sets the surface width used to measure snacks added later.
    #[must_use]
    pub fn with_surface_width(mut self, width: Option<f32>) -> Self {
        self.surface_width = width.filter(|width| width.is_finite());
        self
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    /// Replaces the appearance. Existing anchors keep their spacing; new
    /// and re-anchored nodes use the new values.
    pub fn set_appearance(&mut self, appearance: AppearanceConfig) {
        self.appearance = appearance;
    }

    /// Width snacks are laid out at: the container width on the reported
    /// surface, or the maximum container width before any report.
    #[must_use]
    pub fn layout_width(&self) -> f32 {
        self.surface_width.map_or(self.appearance.max_container_width, |width| {
            self.appearance.container_width(width)
        })
    }

    /// Number of live (not departing) nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// No live node and nothing left animating out.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.order.is_empty() && self.departing.is_empty()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&PresentationNode> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut PresentationNode> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn allocate(&mut self, node: PresentationNode) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn release(&mut self, id: NodeId) -> Option<PresentationNode> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    fn physical_index(&self, logical: usize) -> usize {
        match self.alignment {
            Alignment::Top => logical,
            Alignment::Bottom => self.order.len() - 1 - logical,
        }
    }

    /// The most recently inserted or promoted node.
    #[must_use]
    pub fn latest(&self) -> Option<NodeId> {
        match self.alignment {
            Alignment::Top => self.order.last().copied(),
            Alignment::Bottom => self.order.first().copied(),
        }
    }

    /// Live node ids, oldest first.
    #[must_use]
    pub fn logical_ids(&self) -> Vec<NodeId> {
        match self.alignment {
            Alignment::Top => self.order.clone(),
            Alignment::Bottom => self.order.iter().rev().copied().collect(),
        }
    }

    /// Live snacks, oldest first.
    #[must_use]
    pub fn snacks(&self) -> Vec<&Snack> {
        self.logical_ids()
            .into_iter()
            .filter_map(|id| self.node(id).map(PresentationNode::snack))
            .collect()
    }

    /// Logical index of the live snack with `identity`.
    #[must_use]
    pub fn position(&self, identity: &SnackIdentity) -> Option<usize> {
        self.logical_ids().into_iter().position(|id| {
            self.node(id)
                .is_some_and(|node| node.snack.has_identity(identity))
        })
    }

    #[must_use]
    pub fn snack_at(&self, logical: usize) -> Option<&Snack> {
        if logical >= self.order.len() {
            return None;
        }
        self.node(self.order[self.physical_index(logical)])
            .map(PresentationNode::snack)
    }

    fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z = self.next_z.wrapping_add(1);
        z
    }

    /// Offset at which `node` is completely hidden past the container edge.
    fn off_screen_offset(&self, node: &PresentationNode) -> f32 {
        let inset = match self.alignment {
            Alignment::Top => self.appearance.content_inset.top,
            Alignment::Bottom => self.appearance.content_inset.bottom,
        };
        -(inset + node.height + node.rest_extent(self.alignment))
    }

    /// Resolves the anchor chain of `id` into a distance from the container edge.
    #[must_use]
    pub fn resolved_offset(&self, id: NodeId) -> f32 {
        let mut total = 0.0;
        let mut current = id;
        // A chain longer than the arena means a cycle.
        for _ in 0..=self.slots.len() {
            let Some(node) = self.node(current) else {
                return total;
            };
            match node.binding(self.alignment) {
                None => return total,
                Some(Anchor {
                    target: AnchorTarget::ContainerEdge,
                    spacing,
                }) => return total + spacing,
                Some(Anchor {
                    target: AnchorTarget::OffScreen,
                    ..
                }) => return total + self.off_screen_offset(node),
                Some(Anchor {
                    target: AnchorTarget::FarSide(other),
                    spacing,
                }) => {
                    total += self.node(other).map_or(0.0, PresentationNode::height) + spacing;
                    current = other;
                }
            }
        }
        total
    }

    /// Moves every live node whose resolved offset changed.
    fn relayout(&mut self, now: Instant, spec: AnimationSpec, reduce_motion: bool) {
        for i in 0..self.order.len() {
            let id = self.order[i];
            let target = self.resolved_offset(id);
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            if (node.offset.target() - target).abs() <= f32::EPSILON {
                continue;
            }
            if reduce_motion {
                node.offset.snap_to(target);
            } else {
                node.offset.animate_to(target, spec, now);
            }
        }
    }

    /// Detaches `id` from its neighbors and closes the gap it leaves.
    ///
    /// The follower takes over the removed node's anchor: the predecessor
    /// with the usual spacing, or the container edge when there is none.
    fn unlink(&mut self, id: NodeId) {
        let Some((previous, next)) = self.node(id).map(|node| (node.previous, node.next)) else {
            return;
        };
        let alignment = self.alignment;
        let spacing = self.appearance.inter_item_spacing;

        if let Some(next_node) = next.and_then(|next| self.node_mut(next)) {
            next_node.previous = previous;
            next_node.set_binding(
                alignment,
                Some(match previous {
                    Some(previous) => Anchor::after(previous, spacing),
                    None => Anchor::container_edge(),
                }),
            );
        }
        if let Some(previous_node) = previous.and_then(|previous| self.node_mut(previous)) {
            previous_node.next = next;
        }
        if let Some(node) = self.node_mut(id) {
            node.previous = None;
            node.next = None;
            node.set_binding(alignment, None);
        }
    }

    /// Appends `snack` at the growing edge and animates it in.
    ///
    /// Attaches the container first if needed. Under reduced motion the
    /// node is placed at its final position and fades in instead of sliding.
    pub fn insert(
        &mut self,
        snack: Snack,
        now: Instant,
        reduce_motion: bool,
        surface: &mut dyn DisplaySurface,
    ) -> NodeId {
        if !self.attached {
            self.attached = surface.attach(self.alignment);
            self.events.push(if self.attached {
                QueueEvent::Attached
            } else {
                QueueEvent::SurfaceUnavailable
            });
        }

        let latest = self.latest();
        let anchor = match latest {
            Some(latest) => Anchor::after(latest, self.appearance.inter_item_spacing),
            None => Anchor::container_edge(),
        };
        let z_index = self.bump_z();
        let height = snack.preferred_height(self.layout_width());
        let mut node = PresentationNode::new(snack, z_index);
        node.height = height;
        node.previous = latest;
        node.set_binding(self.alignment, Some(anchor));
        let hidden = self.off_screen_offset(&node);

        let id = self.allocate(node);
        if let Some(latest_node) = latest.and_then(|latest| self.node_mut(latest)) {
            latest_node.next = Some(id);
        }
        match self.alignment {
            Alignment::Top => self.order.push(id),
            Alignment::Bottom => self.order.insert(0, id),
        }

        let target = self.resolved_offset(id);
        let spec = self.appearance.insert_animation;
        if let Some(node) = self.node_mut(id) {
            if reduce_motion {
                node.offset.snap_to(target);
                node.opacity = Motion::Moving(Transition::new(0.0, 1.0, spec, now));
            } else {
                node.offset = Motion::Moving(Transition::new(hidden, target, spec, now));
            }
        }
        id
    }

    /// Removes the live snack with `identity`, if any.
    pub fn remove(
        &mut self,
        identity: &SnackIdentity,
        now: Instant,
        reduce_motion: bool,
    ) -> Option<Snack> {
        let logical = self.position(identity)?;
        self.remove_at(logical, now, reduce_motion)
    }

    /// Removes the live snack at logical index `logical` and animates it out.
    ///
    /// The node leaves the order immediately, so later operations see the
    /// shortened list; it stays in the arena until its exit animation ends.
    pub fn remove_at(&mut self, logical: usize, now: Instant, reduce_motion: bool) -> Option<Snack> {
        if logical >= self.order.len() {
            return None;
        }
        let physical = self.physical_index(logical);
        let id = self.order.remove(physical);
        self.unlink(id);

        let alignment = self.alignment;
        let spec = self.appearance.remove_animation;
        let hidden = self.node(id).map(|node| self.off_screen_offset(node))?;
        let snack = {
            let node = self.node_mut(id)?;
            node.set_binding(alignment, Some(Anchor::off_screen()));
            if !reduce_motion {
                node.offset.animate_to(hidden, spec, now);
            }
            node.opacity.animate_to(0.0, spec, now);
            node.phase = NodePhase::AnimatingOut;
            node.pending = Some(TransitionKind::Remove);
            node.snack.clone()
        };
        self.departing.push(id);
        self.relayout(now, spec, reduce_motion);
        Some(snack)
    }

    /// Replaces the snack at logical index `logical` with `snack` and moves
    /// it to the growing edge.
    ///
    /// When the node already is the latest only its content changes; it
    /// still owes a rearrange completion. Returns `false` for an index out
    /// of range.
    pub fn promote_at(
        &mut self,
        logical: usize,
        snack: Snack,
        now: Instant,
        reduce_motion: bool,
    ) -> bool {
        if logical >= self.order.len() {
            return false;
        }
        let physical = self.physical_index(logical);
        let id = self.order[physical];
        let latest = self.latest();
        let height = snack.preferred_height(self.layout_width());

        if let Some(node) = self.node_mut(id) {
            node.height = height;
            node.snack = snack;
            node.pending = Some(TransitionKind::Rearrange);
            if node.phase == NodePhase::Visible {
                node.phase = NodePhase::Rearranging;
            }
        }
        let Some(latest) = latest.filter(|latest| *latest != id) else {
            return true;
        };

        self.unlink(id);
        let alignment = self.alignment;
        let spacing = self.appearance.inter_item_spacing;
        let z_index = self.bump_z();
        let latest_next = self.node(latest).and_then(PresentationNode::next);

        if let Some(node) = self.node_mut(id) {
            node.previous = Some(latest);
            node.next = latest_next;
            node.set_binding(alignment, Some(Anchor::after(latest, spacing)));
            node.phase = NodePhase::Rearranging;
            node.z_index = z_index;
        }
        if let Some(latest_node) = self.node_mut(latest) {
            latest_node.next = Some(id);
        }
        if let Some(next_node) = latest_next.and_then(|next| self.node_mut(next)) {
            next_node.previous = Some(id);
            next_node.set_binding(alignment, Some(Anchor::after(id, spacing)));
        }

        self.order.remove(physical);
        match alignment {
            Alignment::Top => self.order.push(id),
            Alignment::Bottom => self.order.insert(0, id),
        }

        let spec = self.appearance.rearrange_animation;
        if reduce_motion {
            if let Some(node) = self.node_mut(id) {
                node.opacity = Motion::Moving(Transition::new(0.0, 1.0, spec, now));
            }
        }
        self.relayout(now, spec, reduce_motion);
        true
    }

    /// Updates the measured height of a live node and shifts its followers.
    pub fn set_node_height(&mut self, id: NodeId, height: f32, now: Instant, reduce_motion: bool) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if (node.height - height).abs() <= f32::EPSILON {
            return;
        }
        node.height = height.max(0.0);
        let spec = self.appearance.rearrange_animation;
        self.relayout(now, spec, reduce_motion);
    }

    /// Re-measures every live node for a surface `width` wide and moves the
    /// nodes whose offset changed. Non-finite widths are ignored.
    pub fn set_surface_width(&mut self, width: f32, now: Instant, reduce_motion: bool) {
        if !width.is_finite() {
            return;
        }
        self.surface_width = Some(width);
        let layout_width = self.layout_width();
        for i in 0..self.order.len() {
            let id = self.order[i];
            if let Some(node) = self.node_mut(id) {
                node.height = node.snack.preferred_height(layout_width);
            }
        }
        let spec = self.appearance.rearrange_animation;
        self.relayout(now, spec, reduce_motion);
    }

    /// Settles every finished transition and detaches the container once
    /// the queue has emptied.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn DisplaySurface) {
        let finished: Vec<NodeId> = self
            .order
            .iter()
            .chain(self.departing.iter())
            .copied()
            .filter(|id| {
                self.node(*id).is_some_and(|node| {
                    node.pending.is_some()
                        && node.offset.is_finished(now)
                        && node.opacity.is_finished(now)
                })
            })
            .collect();

        let mut discarded_any = false;
        for id in finished {
            let settled = self.node_mut(id).and_then(|node| {
                node.offset.settle(now);
                node.opacity.settle(now);
                let kind = node.pending.take()?;
                if kind != TransitionKind::Remove {
                    node.phase = NodePhase::Visible;
                }
                Some((kind, node.snack.clone()))
            });
            match settled {
                Some((TransitionKind::Remove, _)) => {
                    self.departing.retain(|departing| *departing != id);
                    if let Some(node) = self.release(id) {
                        discarded_any = true;
                        self.events.push(QueueEvent::Discarded { snack: node.snack });
                    }
                }
                Some((kind, snack)) => self.events.push(QueueEvent::Settled { snack, kind }),
                None => {}
            }
        }

        for i in 0..self.order.len() {
            let id = self.order[i];
            if let Some(node) = self.node_mut(id) {
                node.offset.settle(now);
                node.opacity.settle(now);
            }
        }

        if self.is_idle() && (discarded_any || self.attached) {
            if self.attached {
                surface.detach(self.alignment);
                self.attached = false;
            }
            self.events.push(QueueEvent::Detached);
        }
    }

    /// Whether any node is still moving or owes a completion.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.departing.is_empty()
            || self.order.iter().any(|id| {
                self.node(*id).is_some_and(|node| {
                    node.pending.is_some()
                        || matches!(node.offset, Motion::Moving(_))
                        || matches!(node.opacity, Motion::Moving(_))
                })
            })
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<QueueEvent> {
        std::mem::take(&mut self.events)
    }

    /// Samples every node, live ones in physical order then departing ones.
    #[must_use]
    pub fn frames(&self, now: Instant) -> Vec<NodeFrame<'_>> {
        self.order
            .iter()
            .chain(self.departing.iter())
            .filter_map(|id| {
                let node = self.node(*id)?;
                Some(NodeFrame {
                    id: *id,
                    snack: &node.snack,
                    offset: node.offset.value_at(now),
                    opacity: node.opacity.value_at(now).clamp(0.0, 1.0),
                    height: node.height,
                    z_index: node.z_index,
                    phase: node.phase,
                })
            })
            .collect()
    }

    /// Checks the link structure: walking `next` from the oldest node visits
    /// the logical order, `previous` mirrors `next`, and departing nodes are
    /// unlinked.
    #[must_use]
    pub fn links_consistent(&self) -> bool {
        let logical = self.logical_ids();
        for &id in &logical {
            let Some(node) = self.node(id) else {
                return false;
            };
            if let Some(next) = node.next {
                if self.node(next).and_then(PresentationNode::previous) != Some(id) {
                    return false;
                }
            }
            if let Some(previous) = node.previous {
                if self.node(previous).and_then(PresentationNode::next) != Some(id) {
                    return false;
                }
            }
        }

        let mut walked = Vec::with_capacity(logical.len());
        let mut cursor = logical.first().copied();
        if cursor
            .and_then(|id| self.node(id))
            .is_some_and(|node| node.previous.is_some())
        {
            return false;
        }
        while let Some(id) = cursor {
            if walked.len() > logical.len() {
                return false;
            }
            walked.push(id);
            cursor = self.node(id).and_then(PresentationNode::next);
        }

        walked == logical
            && self.departing.iter().all(|id| {
                self.node(*id)
                    .is_some_and(|node| node.previous.is_none() && node.next.is_none())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_SNACK_HEIGHT;
    use crate::surface::HeadlessSurface;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    fn snack(message: &str, alignment: Alignment) -> Snack {
        Snack::new(message).with_alignment(alignment)
    }

    fn messages(queue: &PresentationQueue) -> Vec<String> {
        queue
            .snacks()
            .into_iter()
            .map(|snack| snack.message().to_string())
            .collect()
    }

    fn later(now: Instant) -> Instant {
        now + Duration::from_secs(5)
    }

    fn filled(alignment: Alignment, names: &[&str]) -> (PresentationQueue, HeadlessSurface, Instant) {
        let mut queue = PresentationQueue::new(alignment, AppearanceConfig::default());
        let mut surface = HeadlessSurface::new();
        let now = Instant::now();
        for name in names {
            queue.insert(snack(name, alignment), now, false, &mut surface);
        }
        (queue, surface, now)
    }

    #[test]
    fn insert_keeps_logical_order_oldest_first() {
        for alignment in Alignment::ALL {
            let (queue, _, _) = filled(alignment, &["1", "2", "3"]);
            assert_eq!(messages(&queue), ["1", "2", "3"]);
            assert!(queue.links_consistent());
        }
    }

    #[test]
    fn latest_sits_at_the_growing_edge() {
        let (top, _, _) = filled(Alignment::Top, &["1", "2"]);
        let (bottom, _, _) = filled(Alignment::Bottom, &["1", "2"]);
        assert_eq!(top.order.last().copied(), top.latest());
        assert_eq!(bottom.order.first().copied(), bottom.latest());
        assert_eq!(
            top.node(top.latest().unwrap()).unwrap().snack().message(),
            "2"
        );
        assert_eq!(
            bottom
                .node(bottom.latest().unwrap())
                .unwrap()
                .snack()
                .message(),
            "2"
        );
    }

    #[test]
    fn first_insert_attaches_the_container() {
        let (mut queue, surface, _) = filled(Alignment::Top, &["1"]);
        assert!(queue.is_attached());
        assert!(surface.is_attached(Alignment::Top));
        assert_eq!(queue.drain_events(), vec![QueueEvent::Attached]);
    }

    #[test]
    fn unavailable_surface_is_reported() {
        let mut queue = PresentationQueue::new(Alignment::Top, AppearanceConfig::default());
        let mut surface = HeadlessSurface::unavailable();
        queue.insert(snack("1", Alignment::Top), Instant::now(), false, &mut surface);
        assert!(!queue.is_attached());
        assert_eq!(queue.drain_events(), vec![QueueEvent::SurfaceUnavailable]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn nodes_stack_with_inter_item_spacing() {
        let (queue, _, _) = filled(Alignment::Top, &["1", "2", "3"]);
        let offsets: Vec<f32> = queue
            .logical_ids()
            .into_iter()
            .map(|id| queue.resolved_offset(id))
            .collect();
        assert_abs_diff_eq!(offsets[0], 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(offsets[1], 80.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(offsets[2], 160.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn insert_slides_in_from_off_screen() {
        let (queue, _, now) = filled(Alignment::Top, &["1"]);
        let frame = queue.frames(now)[0];
        assert!(frame.offset < -(16.0 + 64.0));
        let settled = queue.frames(later(now))[0];
        assert_abs_diff_eq!(settled.offset, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(settled.opacity, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn reduced_motion_fades_in_at_final_position() {
        let mut queue = PresentationQueue::new(Alignment::Bottom, AppearanceConfig::default());
        let mut surface = HeadlessSurface::new();
        let now = Instant::now();
        queue.insert(snack("1", Alignment::Bottom), now, true, &mut surface);
        queue.insert(snack("2", Alignment::Bottom), now, true, &mut surface);

        let frames = queue.frames(now);
        assert_abs_diff_eq!(frames[0].offset, 80.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frames[0].opacity, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frames[1].offset, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn remove_closes_the_gap() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1", "2", "3"]);
        let removed = queue.remove_at(1, now, false).unwrap();
        assert_eq!(removed.message(), "2");
        assert_eq!(messages(&queue), ["1", "3"]);
        assert!(queue.links_consistent());

        let third = queue.logical_ids()[1];
        assert_abs_diff_eq!(queue.resolved_offset(third), 80.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn removing_the_oldest_anchors_follower_to_the_container() {
        let (mut queue, _, now) = filled(Alignment::Bottom, &["1", "2"]);
        queue.remove(&snack("1", Alignment::Bottom).identity(), now, false);
        let remaining = queue.logical_ids()[0];
        assert_eq!(
            queue.node(remaining).unwrap().binding(Alignment::Bottom),
            Some(Anchor::container_edge())
        );
        assert!(queue.links_consistent());
    }

    #[test]
    fn remove_of_absent_identity_is_a_no_op() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1"]);
        assert!(queue.remove(&Snack::new("x").identity(), now, false).is_none());
        assert!(queue.remove_at(3, now, false).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn promote_moves_node_to_growing_edge() {
        for alignment in Alignment::ALL {
            let (mut queue, _, now) = filled(alignment, &["1", "2", "3"]);
            assert!(queue.promote_at(0, snack("1", alignment), now, false));
            assert_eq!(messages(&queue), ["2", "3", "1"]);
            assert!(queue.links_consistent());
            assert_eq!(
                queue.node(queue.latest().unwrap()).unwrap().snack().message(),
                "1"
            );
        }
    }

    #[test]
    fn promote_replaces_content_and_raises_z() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1", "2"]);
        let replacement = snack("1", Alignment::Top).with_duration(9.0);
        queue.promote_at(0, replacement, now, false);
        let latest = queue.node(queue.latest().unwrap()).unwrap();
        assert_eq!(latest.snack().duration(), 9.0);
        assert_eq!(latest.z_index(), 2);
        assert_eq!(latest.phase(), NodePhase::Rearranging);
    }

    #[test]
    fn promoting_the_latest_keeps_order() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1", "2"]);
        assert!(queue.promote_at(1, snack("2", Alignment::Top), now, false));
        assert_eq!(messages(&queue), ["1", "2"]);
        assert!(!queue.promote_at(5, snack("2", Alignment::Top), now, false));
    }

    #[test]
    fn tick_settles_each_node_once() {
        let (mut queue, mut surface, now) = filled(Alignment::Top, &["1", "2"]);
        queue.drain_events();

        queue.tick(now, &mut surface);
        assert!(queue.drain_events().is_empty());

        queue.tick(later(now), &mut surface);
        let events = queue.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|event| matches!(
            event,
            QueueEvent::Settled {
                kind: TransitionKind::Insert,
                ..
            }
        )));

        queue.tick(later(later(now)), &mut surface);
        assert!(queue.drain_events().is_empty());
        assert!(!queue.needs_tick());
    }

    #[test]
    fn remove_during_insert_replaces_the_pending_transition() {
        let (mut queue, mut surface, now) = filled(Alignment::Top, &["1"]);
        queue.drain_events();
        queue.remove_at(0, now, false);
        queue.tick(later(now), &mut surface);
        let events = queue.drain_events();
        assert_eq!(
            events,
            vec![
                QueueEvent::Discarded {
                    snack: snack("1", Alignment::Top)
                },
                QueueEvent::Detached
            ]
        );
        assert!(!surface.is_attached(Alignment::Top));
        assert!(queue.is_idle());
    }

    #[test]
    fn container_stays_while_a_node_is_departing() {
        let (mut queue, mut surface, now) = filled(Alignment::Top, &["1"]);
        queue.remove_at(0, now, false);
        queue.tick(now, &mut surface);
        assert!(queue.is_attached());
        assert!(queue.is_empty());
        assert!(!queue.is_idle());
        assert_eq!(queue.frames(now).len(), 1);
        assert_eq!(queue.frames(now)[0].phase, NodePhase::AnimatingOut);
    }

    #[test]
    fn released_ids_are_not_reused_as_stale_handles() {
        let (mut queue, mut surface, now) = filled(Alignment::Top, &["1"]);
        let first = queue.latest().unwrap();
        queue.remove_at(0, now, false);
        queue.tick(later(now), &mut surface);
        let second = queue.insert(snack("2", Alignment::Top), later(now), false, &mut surface);
        assert_eq!(first.index, second.index);
        assert!(queue.node(first).is_none());
        assert!(queue.node(second).is_some());
    }

    #[test]
    fn titled_snack_is_cleared_by_its_follower() {
        for alignment in Alignment::ALL {
            let mut queue = PresentationQueue::new(alignment, AppearanceConfig::default());
            let mut surface = HeadlessSurface::new();
            let now = Instant::now();
            let titled = Snack::new("Done")
                .with_title("Upload")
                .with_alignment(alignment);
            let first = queue.insert(titled, now, true, &mut surface);
            let second = queue.insert(snack("next", alignment), now, true, &mut surface);

            let height = queue.node(first).map_or(0.0, PresentationNode::height);
            assert!(height > DEFAULT_SNACK_HEIGHT);
            let gap = queue.resolved_offset(second) - queue.resolved_offset(first) - height;
            assert_abs_diff_eq!(gap, 16.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn promote_remeasures_the_new_content() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1", "2"]);
        let ids = queue.logical_ids();
        let long = Snack::new("2".repeat(200)).with_alignment(Alignment::Top);
        assert!(queue.promote_at(1, long, now, true));
        let height = queue.node(ids[1]).map_or(0.0, PresentationNode::height);
        assert!(height > DEFAULT_SNACK_HEIGHT);
    }

    #[test]
    fn narrower_surface_wraps_and_shifts_followers() {
        let mut queue = PresentationQueue::new(Alignment::Top, AppearanceConfig::default());
        let mut surface = HeadlessSurface::new();
        let now = Instant::now();
        let first = queue.insert(snack(&"word ".repeat(20), Alignment::Top), now, true, &mut surface);
        let second = queue.insert(snack("next", Alignment::Top), now, true, &mut surface);
        let before = queue.resolved_offset(second);

        queue.set_surface_width(200.0, now, true);
        assert_abs_diff_eq!(queue.layout_width(), 168.0, epsilon = F32_EPSILON);
        let height = queue.node(first).map_or(0.0, PresentationNode::height);
        assert!(queue.resolved_offset(second) > before);
        assert_abs_diff_eq!(
            queue.frames(now)[1].offset,
            height + 16.0,
            epsilon = 1e-3
        );

        queue.set_surface_width(f32::NAN, now, true);
        assert_abs_diff_eq!(queue.layout_width(), 168.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn taller_node_pushes_followers() {
        let (mut queue, _, now) = filled(Alignment::Top, &["1", "2"]);
        let ids = queue.logical_ids();
        queue.set_node_height(ids[0], 100.0, now, true);
        assert_abs_diff_eq!(queue.resolved_offset(ids[1]), 116.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(queue.frames(now)[1].offset, 116.0, epsilon = F32_EPSILON);
    }
}
