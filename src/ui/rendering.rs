//! Canvas rendering for the background, nodes, and links.
//!
//! Everything is drawn in world coordinates mapped through the current view transform.
//! Links are painted after nodes so they appear on top.

use super::canvas::to_pos2;
use super::state::DrawerApp;
use crate::constants::*;
use crate::types::{Link, Node, Rgb};
use eframe::egui;
use eframe::epaint::StrokeKind;

fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

impl DrawerApp {
    /// Renders the scene: background first, then nodes, then links.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_scene(&self, painter: &egui::Painter) {
        let bounds = self.scene.config().bounds;
        let background = egui::Rect::from_min_max(
            self.world_to_screen(egui::pos2(bounds.left, bounds.top)),
            self.world_to_screen(egui::pos2(bounds.right, bounds.bottom)),
        );
        painter.rect_filled(background, 0.0, color32(BACKGROUND_RGB.into()));

        for (id, node) in self.scene.nodes() {
            self.draw_node(painter, node, self.scene.selection() == Some(id));
        }

        for (_, link) in self.scene.links() {
            self.draw_link(painter, link);
        }
    }

    /// Draws a node as a filled rectangle with a thin outline, plus a dashed frame when selected.
    fn draw_node(&self, painter: &egui::Painter, node: &Node, is_selected: bool) {
        let rect = node.rect();
        let screen_rect = egui::Rect::from_min_max(
            self.world_to_screen(egui::pos2(rect.left, rect.top)),
            self.world_to_screen(egui::pos2(rect.right, rect.bottom)),
        );

        painter.rect_filled(screen_rect, 0.0, color32(node.color));
        painter.rect_stroke(
            screen_rect,
            0.0,
            egui::Stroke::new(NODE_OUTLINE_WIDTH * self.canvas.zoom_factor, egui::Color32::BLACK),
            StrokeKind::Middle,
        );

        if is_selected {
            let outline = [
                screen_rect.left_top(),
                screen_rect.right_top(),
                screen_rect.right_bottom(),
                screen_rect.left_bottom(),
                screen_rect.left_top(),
            ];
            painter.extend(egui::Shape::dashed_line(
                &outline,
                egui::Stroke::new(1.0, egui::Color32::BLACK),
                SELECTION_DASH,
                SELECTION_GAP,
            ));
        }
    }

    /// Draws a link as a thick segment with round caps.
    fn draw_link(&self, painter: &egui::Painter, link: &Link) {
        let start = self.world_to_screen(to_pos2(link.start));
        let end = self.world_to_screen(to_pos2(link.end));
        let width = LINK_WIDTH * self.canvas.zoom_factor;
        let color = color32(link.color);

        painter.line_segment([start, end], egui::Stroke::new(width, color));
        // egui strokes have flat ends; discs at both endpoints give the round caps.
        painter.circle_filled(start, width / 2.0, color);
        painter.circle_filled(end, width / 2.0, color);
    }
}
