//! # Drawer
//!
//! An interactive diagram editor. Double-click the canvas to place a rectangle, drag
//! rectangles with the primary button, and drag with the secondary button from one rectangle
//! to another to connect them with a line. Clicking a line deletes it.
//!
//! ## Features
//! - Rectangles never leave the canvas and never come to rest on top of each other
//! - Lines follow the rectangles they connect
//! - A toolkit-independent [`Scene`] model that can be driven by any pointer source

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod geometry;
mod index;
mod interaction;
mod placement;
mod scene;
mod types;
mod ui;

// Re-export public types and functions
pub use geometry::*;
pub use index::NodeLinkIndex;
pub use interaction::*;
pub use placement::{constrain_to_canvas, fits_within, overlaps};
pub use scene::{Scene, SceneConfig};
pub use types::*;
use ui::DrawerApp;

/// Runs the editor window.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use drawer::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let size = [constants::CANVAS_WIDTH, constants::CANVAS_HEIGHT];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drawer")
            .with_inner_size(size)
            .with_min_inner_size(size),
        ..Default::default()
    };
    eframe::run_native(
        "Drawer",
        options,
        Box::new(|_cc| Ok(Box::new(DrawerApp::default()))),
    )
}
