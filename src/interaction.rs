//! Pointer input and per-item behaviour.
//!
//! The UI layer turns raw input into [`PointerEvent`]s and hands them to
//! [`Scene::handle_pointer`]. The scene routes each event either to the item currently holding
//! the pointer capture or to the item under the pointer, and the item reacts through the
//! [`PointerTarget`] trait. Nodes implement dragging; links implement drawing, binding and
//! deletion.

use crate::geometry::Point;
use crate::placement::constrain_to_canvas;
use crate::scene::Scene;
use crate::types::{LinkId, LinkState, NodeId};

/// Mouse buttons the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button
    Primary,
    /// Usually the right button
    Secondary,
}

/// A discrete pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed
    Down {
        /// Which button
        button: PointerButton,
        /// Pointer position
        pos: Point,
    },
    /// A button was released
    Up {
        /// Which button
        button: PointerButton,
        /// Pointer position
        pos: Point,
    },
    /// The pointer moved
    Move(Point),
    /// The primary button was double-clicked
    DoubleClick(Point),
}

/// Something on the canvas that can receive pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// A node
    Node(NodeId),
    /// A link
    Link(LinkId),
}

/// The interaction currently holding the pointer capture.
///
/// While an interaction is active every move, press and release goes to its item regardless
/// of what lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// Nothing holds the pointer
    #[default]
    Idle,
    /// A node is following the pointer
    DraggingNode {
        /// The dragged node
        node: NodeId,
        /// Pointer position when the drag started
        press: Point,
    },
    /// A link is being drawn out of a node
    PendingLink(LinkId),
}

impl Interaction {
    /// The item holding the capture, if any.
    pub fn captured(&self) -> Option<Item> {
        match self {
            Interaction::Idle => None,
            Interaction::DraggingNode { node, .. } => Some(Item::Node(*node)),
            Interaction::PendingLink(link) => Some(Item::Link(*link)),
        }
    }
}

/// Reactions of a canvas item to pointer events.
///
/// Handlers receive the scene mutably and the pointer position in canvas coordinates.
pub trait PointerTarget {
    /// Primary button pressed over (or captured by) the item.
    fn on_primary_down(self, scene: &mut Scene, pos: Point);
    /// Primary button released while the item holds the capture.
    fn on_primary_up(self, scene: &mut Scene, pos: Point);
    /// Secondary button pressed over (or captured by) the item.
    fn on_secondary_down(self, scene: &mut Scene, pos: Point);
    /// Secondary button released while the item holds the capture.
    fn on_secondary_up(self, scene: &mut Scene, pos: Point);
    /// Pointer moved while the item holds the capture.
    fn on_move(self, scene: &mut Scene, pos: Point);
}

impl PointerTarget for NodeId {
    fn on_primary_down(self, scene: &mut Scene, pos: Point) {
        let Some(node) = scene.nodes.get_mut(&self) else {
            return;
        };
        node.last_valid = node.center;
        node.moving = true;

        scene.selection = Some(self);
        scene.interaction = Interaction::DraggingNode {
            node: self,
            press: pos,
        };
    }

    fn on_primary_up(self, scene: &mut Scene, _pos: Point) {
        let Some(node) = scene.nodes.get_mut(&self) else {
            return;
        };
        if !node.moving {
            return;
        }
        node.moving = false;
        scene.interaction = Interaction::Idle;

        if scene.collides(self) {
            if let Some(node) = scene.nodes.get_mut(&self) {
                log::debug!("{self} dropped on another node, returning to {:?}", node.last_valid);
                node.center = node.last_valid;
            }
            scene.reroute_links_of(self);
        }
    }

    fn on_secondary_down(self, scene: &mut Scene, pos: Point) {
        match scene.nodes.get(&self) {
            Some(node) if !node.moving => {
                scene.begin_link(self, pos);
            }
            _ => {}
        }
    }

    fn on_secondary_up(self, _scene: &mut Scene, _pos: Point) {}

    fn on_move(self, scene: &mut Scene, pos: Point) {
        let Interaction::DraggingNode { node, press } = scene.interaction else {
            return;
        };
        if node != self {
            return;
        }

        let bounds = scene.config.bounds;
        let Some(node) = scene.nodes.get_mut(&self) else {
            return;
        };
        node.center = constrain_to_canvas(node.last_valid + (pos - press), node.size, &bounds);
        scene.reroute_links_of(self);
    }
}

impl PointerTarget for LinkId {
    fn on_primary_down(self, scene: &mut Scene, _pos: Point) {
        log::debug!("deleting {self}");
        scene.remove_link(self);
    }

    fn on_primary_up(self, _scene: &mut Scene, _pos: Point) {}

    fn on_secondary_down(self, _scene: &mut Scene, _pos: Point) {}

    fn on_secondary_up(self, scene: &mut Scene, pos: Point) {
        if scene.interaction != Interaction::PendingLink(self) {
            return;
        }
        let origin = match scene.index.nodes_of(self) {
            [origin] => *origin,
            _ => return,
        };
        scene.interaction = Interaction::Idle;

        let target = scene.node_at_except(pos, origin);
        let Some(target) = target else {
            log::debug!("{self} released away from another node, discarding");
            scene.remove_link(self);
            return;
        };
        let Some(center) = scene.nodes.get(&target).map(|n| n.center) else {
            return;
        };

        scene.index.connect(self, target);
        if let Some(link) = scene.links.get_mut(&self) {
            link.end = center;
            link.state = LinkState::Bound;
        }
        log::debug!("{self} bound {origin} to {target}");
    }

    fn on_move(self, scene: &mut Scene, pos: Point) {
        if scene.index.nodes_of(self).len() != 1 {
            return;
        }
        if let Some(link) = scene.links.get_mut(&self) {
            link.end = pos;
        }
    }
}

impl PointerTarget for Item {
    fn on_primary_down(self, scene: &mut Scene, pos: Point) {
        match self {
            Item::Node(id) => id.on_primary_down(scene, pos),
            Item::Link(id) => id.on_primary_down(scene, pos),
        }
    }

    fn on_primary_up(self, scene: &mut Scene, pos: Point) {
        match self {
            Item::Node(id) => id.on_primary_up(scene, pos),
            Item::Link(id) => id.on_primary_up(scene, pos),
        }
    }

    fn on_secondary_down(self, scene: &mut Scene, pos: Point) {
        match self {
            Item::Node(id) => id.on_secondary_down(scene, pos),
            Item::Link(id) => id.on_secondary_down(scene, pos),
        }
    }

    fn on_secondary_up(self, scene: &mut Scene, pos: Point) {
        match self {
            Item::Node(id) => id.on_secondary_up(scene, pos),
            Item::Link(id) => id.on_secondary_up(scene, pos),
        }
    }

    fn on_move(self, scene: &mut Scene, pos: Point) {
        match self {
            Item::Node(id) => id.on_move(scene, pos),
            Item::Link(id) => id.on_move(scene, pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_primary_down_starts_drag_and_selects() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_primary_down(&mut scene, p(110.0, 105.0));

        assert_eq!(scene.selection(), Some(a));
        assert!(scene.node(a).unwrap().moving);
        assert_eq!(scene.interaction().captured(), Some(Item::Node(a)));
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_primary_down(&mut scene, p(130.0, 110.0));
        a.on_move(&mut scene, p(230.0, 210.0));

        assert_eq!(scene.node(a).unwrap().center, p(200.0, 200.0));
    }

    #[test]
    fn test_drag_is_clamped_to_canvas() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_primary_down(&mut scene, p(100.0, 100.0));
        a.on_move(&mut scene, p(-300.0, 900.0));

        assert_eq!(scene.node(a).unwrap().center, p(50.0, 575.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_move(&mut scene, p(300.0, 300.0));

        assert_eq!(scene.node(a).unwrap().center, p(100.0, 100.0));
    }

    #[test]
    fn test_secondary_down_while_moving_is_ignored() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_primary_down(&mut scene, p(100.0, 100.0));
        a.on_secondary_down(&mut scene, p(100.0, 100.0));

        assert_eq!(scene.links().count(), 0);
    }

    #[test]
    fn test_secondary_down_creates_pending_link() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_secondary_down(&mut scene, p(140.0, 110.0));

        let (link_id, link) = scene.links().next().unwrap();
        assert_eq!(link.state, LinkState::Pending);
        assert_eq!(link.start, p(100.0, 100.0));
        assert_eq!(link.end, p(140.0, 110.0));
        assert_eq!(scene.nodes_of(link_id), &[a]);
        assert_eq!(scene.interaction(), Interaction::PendingLink(link_id));
    }

    #[test]
    fn test_pending_link_end_follows_pointer() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();
        a.on_secondary_down(&mut scene, p(100.0, 100.0));
        let (link_id, _) = scene.links().next().unwrap();

        link_id.on_move(&mut scene, p(300.0, 250.0));

        assert_eq!(scene.link(link_id).unwrap().end, p(300.0, 250.0));
    }

    #[test]
    fn test_bound_link_ignores_pointer_moves() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();
        let b = scene.create_node_at(p(400.0, 100.0)).unwrap();
        a.on_secondary_down(&mut scene, p(100.0, 100.0));
        let (link_id, _) = scene.links().next().unwrap();
        link_id.on_secondary_up(&mut scene, p(400.0, 100.0));

        link_id.on_move(&mut scene, p(10.0, 10.0));

        assert_eq!(scene.link(link_id).unwrap().end, scene.node(b).unwrap().center);
    }

    #[test]
    fn test_release_over_origin_discards_link() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();
        a.on_secondary_down(&mut scene, p(100.0, 100.0));
        let (link_id, _) = scene.links().next().unwrap();

        link_id.on_secondary_up(&mut scene, p(120.0, 100.0));

        assert_eq!(scene.link_state(link_id), LinkState::Removed);
        assert!(scene.links_of(a).is_empty());
        assert_eq!(scene.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_release_on_shared_border_binds_older_node() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();
        let b = scene.create_node_at(p(200.0, 100.0)).unwrap();
        b.on_secondary_down(&mut scene, p(200.0, 100.0));
        let (link_id, _) = scene.links().next().unwrap();

        // x = 150 is the edge both nodes share; B is newer and lies on top.
        link_id.on_secondary_up(&mut scene, p(150.0, 110.0));

        assert_eq!(scene.link_state(link_id), LinkState::Bound);
        assert_eq!(scene.nodes_of(link_id), &[b, a]);
        assert_eq!(scene.link(link_id).unwrap().end, p(100.0, 100.0));
    }

    #[test]
    fn test_drag_starts_from_last_valid_position() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();

        a.on_primary_down(&mut scene, p(100.0, 110.0));
        assert_eq!(scene.node(a).unwrap().last_valid, p(100.0, 100.0));
        a.on_move(&mut scene, p(150.0, 130.0));
        a.on_move(&mut scene, p(200.0, 150.0));

        let node = scene.node(a).unwrap();
        assert_eq!(node.center, p(200.0, 140.0));
        assert_eq!(node.last_valid, p(100.0, 100.0));
    }

    #[test]
    fn test_primary_down_on_link_removes_it() {
        let mut scene = Scene::default();
        let a = scene.create_node_at(p(100.0, 100.0)).unwrap();
        scene.create_node_at(p(400.0, 100.0)).unwrap();
        a.on_secondary_down(&mut scene, p(100.0, 100.0));
        let (link_id, _) = scene.links().next().unwrap();
        link_id.on_secondary_up(&mut scene, p(400.0, 100.0));
        assert_eq!(scene.link_state(link_id), LinkState::Bound);

        Item::Link(link_id).on_primary_down(&mut scene, p(250.0, 100.0));

        assert_eq!(scene.link_state(link_id), LinkState::Removed);
        assert!(scene.links_of(a).is_empty());
    }

    #[test]
    fn test_captured_item() {
        assert_eq!(Interaction::Idle.captured(), None);
        assert_eq!(
            Interaction::PendingLink(LinkId(4)).captured(),
            Some(Item::Link(LinkId(4)))
        );
        let drag = Interaction::DraggingNode {
            node: NodeId(2),
            press: p(0.0, 0.0),
        };
        assert_eq!(drag.captured(), Some(Item::Node(NodeId(2))));
    }
}
