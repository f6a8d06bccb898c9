use std::time::Instant;

use crate::layout::Viewport;
use crate::scene::render;

use super::super::GalaxyApp;

impl GalaxyApp {
    /// Throws away the current scene and lays the whole tree out again.
    pub(in crate::app) fn rebuild_scene(&mut self, viewport: Viewport) {
        let started = Instant::now();

        render(&self.tree, viewport, &self.layout, &mut self.scene);
        self.scene.viewport = viewport;
        self.render_count = self.render_count.wrapping_add(1);

        log::debug!(
            "render #{}: {} nodes, {} segments for {}x{} in {:?}",
            self.render_count,
            self.scene.nodes.len(),
            self.scene.segments.len(),
            viewport.width,
            viewport.height,
            started.elapsed()
        );
    }

    /// Renders immediately on the first frame, afterwards only once a resize
    /// burst has settled.
    pub(in crate::app) fn sync_scene(&mut self, viewport: Viewport, now: Instant) {
        if self.render_count == 0 {
            self.rebuild_scene(viewport);
            self.resize.settle(viewport);
            return;
        }

        self.resize.observe(viewport, now);
        if self.resize.take_due(now) {
            self.rebuild_scene(viewport);
        }
    }
}
