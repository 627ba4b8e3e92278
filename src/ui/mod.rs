//! User interface for the diagram editor.
//!
//! This module hosts the eframe application: it sizes the canvas, forwards pointer input to
//! the scene, and paints the result.
//!
//! # Module Organization
//!
//! - `state` - The `DrawerApp` struct and the canvas view transform
//! - `canvas` - Fitting the scene into the window and translating pointer input
//! - `rendering` - Drawing the background, nodes, and links

mod canvas;
mod rendering;
mod state;

pub use state::DrawerApp;

use eframe::egui;

impl eframe::App for DrawerApp {
    /// Main update function called by egui for each frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl DrawerApp {
    /// Renders the canvas and handles pointer interaction with it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        // Keep the whole scene visible whatever the window size
        self.fit_canvas(response.rect);

        self.handle_canvas_input(ui, &response);

        self.render_scene(&painter);
    }
}
