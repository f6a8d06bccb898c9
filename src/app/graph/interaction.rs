use eframe::egui::{Pos2, Rect};

use crate::scene::VisualNode;

use super::super::GalaxyApp;
use super::super::render_utils::to_layout;

impl GalaxyApp {
    pub(in crate::app) fn hovered_node(&self, rect: Rect, pointer: Option<Pos2>) -> Option<&VisualNode> {
        let pointer = pointer.filter(|pointer| rect.contains(*pointer))?;
        self.scene.node_at(to_layout(rect, pointer))
    }

    pub(in crate::app) fn select_node(&mut self, node_id: &str) {
        if self.panel.select(&self.tree, node_id) {
            log::debug!("selected node {node_id:?}");
        }
    }

    pub(in crate::app) fn dismiss_details(&mut self) {
        self.panel.dismiss();
    }
}
