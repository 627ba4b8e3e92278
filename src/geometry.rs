//! Geometry primitives in canvas coordinates.
//!
//! The canvas uses a top-left origin: x grows rightward, y grows downward.
//! Nodes are positioned by their center, so most helpers work from a center and a size.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Extent along x.
    pub width: f32,
    /// Extent along y.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half extents as `(half_width, half_height)`.
    pub fn half(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// An axis-aligned rectangle stored by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Smallest x.
    pub left: f32,
    /// Smallest y.
    pub top: f32,
    /// Largest x.
    pub right: f32,
    /// Largest y.
    pub bottom: f32,
}

impl Rect {
    /// Rectangle spanning `origin` to `origin + size`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center_size(center: Point, size: Size) -> Self {
        let (hw, hh) = size.half();
        Self {
            left: center.x - hw,
            top: center.y - hh,
            right: center.x + hw,
            bottom: center.y + hh,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Inclusive point containment (edges count as inside).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether `other` lies entirely inside this rectangle, edges included.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Whether the two rectangles share an area. Rectangles that only touch along an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Distance from `p` to the segment `a..b`.
///
/// Projects the point onto the segment and clamps the projection to the segment endpoints.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let seg = b - a;
    let rel = p - a;
    let len_sq = seg.x * seg.x + seg.y * seg.y;

    if len_sq < 0.0001 {
        return (rel.x * rel.x + rel.y * rel.y).sqrt();
    }

    let t = ((rel.x * seg.x + rel.y * seg.y) / len_sq).clamp(0.0, 1.0);
    let dx = p.x - (a.x + seg.x * t);
    let dy = p.y - (a.y + seg.y * t);
    (dx * dx + dy * dy).sqrt()
}
