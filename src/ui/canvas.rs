//! Canvas view transform and pointer input.
//!
//! This module keeps the scene fitted into the canvas widget and turns raw egui pointer
//! events into scene [`PointerEvent`]s in world coordinates.

use super::state::DrawerApp;
use crate::geometry::Point;
use crate::interaction::{PointerButton, PointerEvent};
use eframe::egui;

/// Converts an egui position to a scene point without any transform.
pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Converts a scene point to an egui position without any transform.
pub fn to_pos2(point: Point) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

fn to_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

impl DrawerApp {
    /// Converts screen coordinates to world coordinates accounting for zoom and offset.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas.offset) / self.canvas.zoom_factor
    }

    /// Converts world coordinates to screen coordinates accounting for zoom and offset.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        world_pos * self.canvas.zoom_factor + self.canvas.offset
    }

    /// Scales and centers the scene bounds inside `canvas_rect`, preserving the aspect ratio.
    ///
    /// A degenerate widget (zero width or height) leaves the previous transform in place.
    pub fn fit_canvas(&mut self, canvas_rect: egui::Rect) {
        let bounds = self.scene.config().bounds;
        let zoom = (canvas_rect.width() / bounds.width()).min(canvas_rect.height() / bounds.height());
        if !zoom.is_finite() || zoom <= f32::EPSILON {
            return;
        }

        let scene_center = to_pos2(bounds.center());
        self.canvas.zoom_factor = zoom;
        self.canvas.offset = canvas_rect.center().to_vec2() - scene_center.to_vec2() * zoom;
    }

    /// Collects this frame's pointer input as scene events, in the order it happened.
    ///
    /// Presses only count when they start inside the canvas; moves and releases are always
    /// forwarded so that an item holding the pointer keeps receiving them.
    pub fn collect_pointer_events(&self, ui: &egui::Ui, canvas_rect: egui::Rect) -> Vec<PointerEvent> {
        ui.input(|i| {
            let mut out = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        out.push(PointerEvent::Move(to_point(self.screen_to_world(*pos))));
                    }
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed,
                        ..
                    } => {
                        let Some(button) = to_button(*button) else {
                            continue;
                        };
                        let world = to_point(self.screen_to_world(*pos));
                        if *pressed {
                            if canvas_rect.contains(*pos) {
                                out.push(PointerEvent::Down { button, pos: world });
                            }
                        } else {
                            out.push(PointerEvent::Up { button, pos: world });
                        }
                    }
                    _ => {}
                }
            }

            if i.pointer.button_double_clicked(egui::PointerButton::Primary) {
                if let Some(pos) = i.pointer.interact_pos() {
                    if canvas_rect.contains(pos) {
                        out.push(PointerEvent::DoubleClick(to_point(self.screen_to_world(pos))));
                    }
                }
            }
            out
        })
    }

    /// Feeds this frame's pointer input to the scene.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        for event in self.collect_pointer_events(ui, response.rect) {
            self.scene.handle_pointer(event);
        }
    }
}
