//! Shared application-wide constants.
//! Centralizes the fixed canvas geometry and the drawing values used by the UI.

// Canvas
/// Width of the scene in world units.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Height of the scene in world units.
pub const CANVAS_HEIGHT: f32 = 600.0;

// Node dimensions
/// Node width in world units.
pub const NODE_WIDTH: f32 = 100.0;
/// Node height in world units.
pub const NODE_HEIGHT: f32 = 50.0;
/// Outline width of a node (in world units, scaled with the view).
pub const NODE_OUTLINE_WIDTH: f32 = 1.0;

// Links
/// Stroke width of a link in world units. Also determines the link hit area.
pub const LINK_WIDTH: f32 = 5.0;

// Selection
/// Dash length of the selection outline (in screen pixels).
pub const SELECTION_DASH: f32 = 4.0;
/// Gap between dashes of the selection outline (in screen pixels).
pub const SELECTION_GAP: f32 = 3.0;

// Colours
/// Canvas background (light yellow).
pub const BACKGROUND_RGB: (u8, u8, u8) = (255, 255, 224);
/// Colour used when the OS random source is unavailable.
pub const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);
