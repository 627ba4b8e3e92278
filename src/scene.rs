//! The scene: every node and link on the canvas plus the adjacency index between them.
//!
//! The scene owns its items by value and hands out [`NodeId`]/[`LinkId`] handles. The index
//! and the active interaction only ever store handles, so removing an item cannot leave a
//! dangling reference behind.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, LINK_WIDTH, NODE_HEIGHT, NODE_WIDTH};
use crate::geometry::{distance_to_segment, Point, Rect, Size};
use crate::index::NodeLinkIndex;
use crate::interaction::{Interaction, Item, PointerButton, PointerEvent, PointerTarget};
use crate::placement::{fits_within, overlaps};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed geometry of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Canvas rectangle every node must stay inside
    pub bounds: Rect,
    /// Size given to every new node
    pub node_size: Size,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::from_origin_size(
                Point::new(0.0, 0.0),
                Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            ),
            node_size: Size::new(NODE_WIDTH, NODE_HEIGHT),
        }
    }
}

/// All nodes and links on the canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub(crate) config: SceneConfig,
    pub(crate) nodes: BTreeMap<NodeId, Node>,
    pub(crate) links: BTreeMap<LinkId, Link>,
    pub(crate) index: NodeLinkIndex,
    pub(crate) selection: Option<NodeId>,
    #[serde(skip)]
    pub(crate) interaction: Interaction,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene with the given geometry.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Serialize the scene to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from a JSON string. The restored scene has no active interaction.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fixed geometry of the scene.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Links in creation order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links.iter().map(|(id, link)| (*id, link))
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up a link.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    /// Links attached to `node`, in attachment order.
    pub fn links_of(&self, node: NodeId) -> &[LinkId] {
        self.index.links_of(node)
    }

    /// Nodes attached to `link`, in attachment order.
    pub fn nodes_of(&self, link: LinkId) -> &[NodeId] {
        self.index.nodes_of(link)
    }

    /// The adjacency index.
    pub fn index(&self) -> &NodeLinkIndex {
        &self.index
    }

    /// The selected node, if any.
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The interaction currently holding the pointer.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Lifecycle state of a link; links no longer in the scene report [`LinkState::Removed`].
    pub fn link_state(&self, id: LinkId) -> LinkState {
        self.links
            .get(&id)
            .map(|link| link.state)
            .unwrap_or(LinkState::Removed)
    }

    fn next_handle(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Places a new node centered on `center`.
    ///
    /// The node is rejected if any part of it would lie outside the canvas or if it would
    /// overlap an existing node; the scene is left untouched in that case.
    pub fn create_node_at(&mut self, center: Point) -> Result<NodeId, PlacementError> {
        let size = self.config.node_size;
        if !fits_within(center, size, &self.config.bounds) {
            return Err(PlacementError::OutOfBounds);
        }
        if self
            .nodes
            .values()
            .any(|other| overlaps(center, other.center, size))
        {
            return Err(PlacementError::Overlap);
        }

        let id = NodeId(self.next_handle());
        self.nodes.insert(id, Node::new(center, size, Rgb::random()));
        log::debug!("created {id} at ({}, {})", center.x, center.y);
        Ok(id)
    }

    /// Removes a node together with every link attached to it.
    ///
    /// Returns `false` if the node did not exist.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_none() {
            return false;
        }
        for link in self.index.remove_node(id) {
            self.remove_link(link);
        }
        if self.selection == Some(id) {
            self.selection = None;
        }
        if let Interaction::DraggingNode { node, .. } = self.interaction {
            if node == id {
                self.interaction = Interaction::Idle;
            }
        }
        log::debug!("removed {id}");
        true
    }

    /// Removes a link and detaches it from its nodes. Releases the pointer if the link held it.
    ///
    /// Returns `false` if the link did not exist.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        self.index.disconnect(id);
        if self.interaction == Interaction::PendingLink(id) {
            self.interaction = Interaction::Idle;
        }
        self.links.remove(&id).is_some()
    }

    /// Starts drawing a link out of `origin` towards `pointer` and gives it the pointer capture.
    pub(crate) fn begin_link(&mut self, origin: NodeId, pointer: Point) -> Option<LinkId> {
        let start = self.nodes.get(&origin)?.center;
        let id = LinkId(self.next_handle());
        self.links
            .insert(id, Link::pending(start, pointer, Rgb::random()));
        self.index.connect(id, origin);
        self.interaction = Interaction::PendingLink(id);
        log::debug!("started {id} from {origin}");
        Some(id)
    }

    /// Topmost node containing `pos`. Newer nodes lie above older ones.
    pub fn node_at(&self, pos: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|(_, node)| node.rect().contains(pos))
            .map(|(id, _)| *id)
    }

    /// Topmost node containing `pos` other than `except`.
    ///
    /// On a border shared by two touching nodes both contain the point, so skipping `except`
    /// can still find the other one.
    pub fn node_at_except(&self, pos: Point, except: NodeId) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|(id, node)| **id != except && node.rect().contains(pos))
            .map(|(id, _)| *id)
    }

    /// Topmost link whose stroke covers `pos`. Newer links lie above older ones.
    pub fn link_at(&self, pos: Point) -> Option<LinkId> {
        self.links
            .iter()
            .rev()
            .find(|(_, link)| {
                distance_to_segment(pos, link.start, link.end) <= LINK_WIDTH / 2.0
            })
            .map(|(id, _)| *id)
    }

    /// Topmost item at `pos`. Links are drawn above nodes and win ties.
    pub fn item_at(&self, pos: Point) -> Option<Item> {
        self.link_at(pos)
            .map(Item::Link)
            .or_else(|| self.node_at(pos).map(Item::Node))
    }

    /// Whether `id` overlaps any other node.
    pub fn collides(&self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        self.nodes
            .iter()
            .any(|(other_id, other)| *other_id != id && node.rect().intersects(&other.rect()))
    }

    /// Recomputes the route of every link attached to `node` at both ends.
    ///
    /// Links that are still pending are left alone; their free end belongs to the pointer.
    pub fn reroute_links_of(&mut self, node: NodeId) {
        for link_id in self.index.links_of(node) {
            let [begin, end] = self.index.nodes_of(*link_id) else {
                continue;
            };
            let (Some(begin), Some(end)) = (self.nodes.get(begin), self.nodes.get(end)) else {
                continue;
            };
            if let Some(link) = self.links.get_mut(link_id) {
                link.start = begin.center;
                link.end = end.center;
            }
        }
    }

    /// Routes one pointer event.
    ///
    /// Events go to the item holding the pointer capture if there is one, otherwise presses
    /// go to the topmost item under the pointer. A primary press on empty canvas clears the
    /// selection and a double click tries to place a node.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let captured = self.interaction.captured();
        match event {
            PointerEvent::DoubleClick(pos) => {
                if let Err(err) = self.create_node_at(pos) {
                    log::debug!("node at ({}, {}) rejected: {err}", pos.x, pos.y);
                }
            }
            PointerEvent::Down { button, pos } => {
                let target = captured.or_else(|| self.item_at(pos));
                match (target, button) {
                    (Some(item), PointerButton::Primary) => item.on_primary_down(self, pos),
                    (Some(item), PointerButton::Secondary) => item.on_secondary_down(self, pos),
                    (None, PointerButton::Primary) => self.selection = None,
                    (None, PointerButton::Secondary) => {}
                }
            }
            PointerEvent::Move(pos) => {
                if let Some(item) = captured {
                    item.on_move(self, pos);
                }
            }
            PointerEvent::Up { button, pos } => {
                if let Some(item) = captured {
                    match button {
                        PointerButton::Primary => item.on_primary_up(self, pos),
                        PointerButton::Secondary => item.on_secondary_up(self, pos),
                    }
                    self.trace_snapshot();
                }
            }
        }
    }

    fn trace_snapshot(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match self.to_json() {
            Ok(json) => log::trace!("scene after release: {json}"),
            Err(err) => log::warn!("failed to serialize scene: {err}"),
        }
    }
}
