use std::time::Duration;

use eframe::egui::Context;

use crate::content::ContentTree;
use crate::layout::LayoutConfig;
use crate::scene::Scene;

mod graph;
mod panel;
mod render_utils;
mod resize;
mod ui;

use panel::DetailPanel;
use resize::ResizeCoordinator;

/// Owns everything the galaxy view needs; nothing lives in globals.
pub struct GalaxyApp {
    tree: ContentTree,
    layout: LayoutConfig,
    scene: Scene,
    panel: DetailPanel,
    resize: ResizeCoordinator,
    render_count: u64,
}

impl GalaxyApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tree: ContentTree,
        layout: LayoutConfig,
        resize_quiet: Duration,
    ) -> Self {
        Self::with_parts(tree, layout, resize_quiet)
    }

    fn with_parts(tree: ContentTree, layout: LayoutConfig, resize_quiet: Duration) -> Self {
        Self {
            tree,
            layout,
            scene: Scene::default(),
            panel: DetailPanel::default(),
            resize: ResizeCoordinator::new(resize_quiet),
            render_count: 0,
        }
    }
}

impl eframe::App for GalaxyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
