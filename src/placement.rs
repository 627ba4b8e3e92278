//! Placement rules for nodes on the canvas.
//!
//! Dragging clamps each axis independently so the node stays inside the canvas. Overlap with
//! other nodes is not part of the clamp; callers check it when a node comes to rest.

use crate::geometry::{Point, Rect, Size};

/// Clamps a proposed node center so a box of `size` around it stays within `bounds`.
///
/// The x and y axes are clamped independently, so a proposal past a corner ends up in that
/// corner rather than being projected along the drag direction.
pub fn constrain_to_canvas(proposed: Point, size: Size, bounds: &Rect) -> Point {
    let (hw, hh) = size.half();
    let mut x = proposed.x;
    let mut y = proposed.y;

    if y < bounds.top + hh {
        y = bounds.top + hh;
    }
    if y > bounds.bottom - hh {
        y = bounds.bottom - hh;
    }
    if x < bounds.left + hw {
        x = bounds.left + hw;
    }
    if x > bounds.right - hw {
        x = bounds.right - hw;
    }

    Point::new(x, y)
}

/// Whether a node of `size` centered on `center` lies entirely inside `bounds`.
pub fn fits_within(center: Point, size: Size, bounds: &Rect) -> bool {
    bounds.contains_rect(&Rect::from_center_size(center, size))
}

/// Whether two nodes of `size` centered on `a` and `b` overlap.
pub fn overlaps(a: Point, b: Point, size: Size) -> bool {
    Rect::from_center_size(a, size).intersects(&Rect::from_center_size(b, size))
}
