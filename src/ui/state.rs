//! Application state structures.
//!
//! The app owns the scene being edited and the view transform that maps it onto the window.

use crate::scene::Scene;
use eframe::egui;

/// How the scene is currently mapped onto the canvas widget.
///
/// The view keeps the whole scene visible: `zoom_factor` scales world units to screen pixels
/// and `offset` places the scaled scene inside the widget.
pub struct CanvasState {
    /// Screen-space translation applied after scaling
    pub offset: egui::Vec2,
    /// Screen pixels per world unit
    pub zoom_factor: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            zoom_factor: 1.0,
        }
    }
}

/// The main application structure.
///
/// This struct implements the `eframe::App` trait; it forwards pointer input to the scene and
/// paints the result every frame.
#[derive(Default)]
pub struct DrawerApp {
    /// The nodes and links being edited
    pub scene: Scene,
    /// Canvas view transform
    pub canvas: CanvasState,
}
