//! Core data types for the diagram editor.
//!
//! This module defines the entities that live on the canvas (nodes and links), the handles
//! used to refer to them, and the error returned when a node cannot be placed.

use crate::constants::FALLBACK_RGB;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node in the scene. Handles are never reused within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Handle of a link in the scene. Handles are never reused within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link#{}", self.0)
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Picks a colour from the OS random source, falling back to gray if it is unavailable.
    pub fn random() -> Self {
        match getrandom::u32() {
            Ok(bits) => {
                let [r, g, b, _] = bits.to_le_bytes();
                Rgb(r, g, b)
            }
            Err(err) => {
                log::warn!("random source unavailable, using fallback colour: {err}");
                FALLBACK_RGB.into()
            }
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

/// A draggable rectangle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Center of the node in canvas coordinates
    pub center: Point,
    /// Fixed width and height
    pub size: Size,
    /// Fill colour
    pub color: Rgb,
    /// Set while the node is being dragged with the primary button
    pub moving: bool,
    /// Position the node returns to if a drag ends on top of another node
    pub last_valid: Point,
}

impl Node {
    /// Creates a node at rest at `center`.
    pub fn new(center: Point, size: Size, color: Rgb) -> Self {
        Self {
            center,
            size,
            color,
            moving: false,
            last_valid: center,
        }
    }

    /// The node's bounding box in canvas coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Lifecycle state of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkState {
    /// One end is attached to a node, the other follows the pointer
    Pending,
    /// Both ends are attached to nodes
    Bound,
    /// The link is no longer part of the scene
    Removed,
}

/// A connector line between nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// First endpoint in canvas coordinates
    pub start: Point,
    /// Second endpoint in canvas coordinates
    pub end: Point,
    /// Stroke colour
    pub color: Rgb,
    /// Whether the link is still being drawn or attached at both ends
    pub state: LinkState,
}

impl Link {
    /// Creates a pending link running from `start` to `end`.
    pub fn pending(start: Point, end: Point, color: Rgb) -> Self {
        Self {
            start,
            end,
            color,
            state: LinkState::Pending,
        }
    }
}

/// Reasons a node cannot be placed where it was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The node would intersect another node
    #[error("node would overlap an existing node")]
    Overlap,
    /// Part of the node would lie outside the canvas
    #[error("node would extend past the canvas bounds")]
    OutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(
            Point::new(100.0, 200.0),
            Size::new(100.0, 50.0),
            Rgb(1, 2, 3),
        );

        assert_eq!(node.center, Point::new(100.0, 200.0));
        assert_eq!(node.last_valid, node.center);
        assert!(!node.moving);
        assert_eq!(node.rect().left, 50.0);
        assert_eq!(node.rect().bottom, 225.0);
    }

    #[test]
    fn test_link_starts_pending() {
        let link = Link::pending(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Rgb(0, 0, 0));
        assert_eq!(link.state, LinkState::Pending);
        assert_eq!(link.end, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(NodeId(3).to_string(), "node#3");
        assert_eq!(LinkId(7).to_string(), "link#7");
    }

    #[test]
    fn test_placement_error_messages() {
        assert_eq!(
            PlacementError::Overlap.to_string(),
            "node would overlap an existing node"
        );
        assert_eq!(
            PlacementError::OutOfBounds.to_string(),
            "node would extend past the canvas bounds"
        );
    }
}
