use std::time::Instant;

use eframe::egui::{self, Align2, Color32, CursorIcon, FontId, Sense, Stroke, Ui, vec2};

use crate::layout::Viewport;

use super::super::GalaxyApp;
use super::super::render_utils::{
    SEGMENT_COLOR, blend_color, depth_color, draw_background, to_screen,
};

impl GalaxyApp {
    pub(in crate::app) fn draw_galaxy(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        let now = Instant::now();
        self.sync_scene(Viewport::new(rect.width(), rect.height()), now);
        if let Some(wait) = self.resize.repaint_after(now) {
            ui.ctx().request_repaint_after(wait);
        }

        draw_background(&painter, rect);

        for segment in &self.scene.segments {
            painter.line_segment(
                [to_screen(rect, segment.start), to_screen(rect, segment.end)],
                Stroke::new(2.0, SEGMENT_COLOR),
            );
        }

        let pointer = ui.input(|input| input.pointer.hover_pos());
        let hovered_id = self
            .hovered_node(rect, pointer)
            .map(|node| node.node_id.clone());
        if hovered_id.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let selected_id = self.panel.shown_node_id();
        let highlight = Color32::from_rgb(0, 212, 255);

        for node in &self.scene.nodes {
            let center = to_screen(rect, node.center());
            let radius = node.size / 2.0;
            let is_hovered = hovered_id.as_deref() == Some(node.node_id.as_str());
            let is_selected = selected_id == Some(node.node_id.as_str());

            let mut fill = depth_color(node.depth);
            if is_hovered {
                fill = blend_color(fill, highlight, 0.35);
            }

            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(
                center,
                radius,
                if is_selected {
                    Stroke::new(3.0, Color32::from_rgb(245, 206, 93))
                } else {
                    Stroke::new(1.5, blend_color(fill, highlight, 0.6))
                },
            );

            let font_size = match node.depth {
                0 => 15.0,
                1 => 13.0,
                _ => 11.0,
            };
            let galley = painter.layout(
                node.label.clone(),
                FontId::proportional(font_size),
                Color32::from_gray(240),
                node.size * 0.78,
            );
            let text_pos = center - galley.size() / 2.0;
            painter.galley(text_pos, galley, Color32::from_gray(240));
        }

        if self.resize.is_pending() {
            painter.text(
                rect.left_bottom() + vec2(10.0, -10.0),
                Align2::LEFT_BOTTOM,
                "resizing...",
                FontId::proportional(12.0),
                Color32::from_gray(150),
            );
        }

        if response.clicked_by(egui::PointerButton::Primary)
            && let Some(node_id) = self
                .hovered_node(rect, response.interact_pointer_pos())
                .map(|node| node.node_id.clone())
        {
            self.select_node(&node_id);
        }
    }
}
