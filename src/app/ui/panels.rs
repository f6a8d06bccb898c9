use eframe::egui::{self, Align, Context, Layout};

use super::super::GalaxyApp;

impl GalaxyApp {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("KKA Galaxy Explorer");
                    ui.separator();
                    ui.label(self.tree.root().label.as_str());
                    ui.label(format!("nodes: {}", self.tree.node_count()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.status_text());
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_galaxy(ui));

        self.draw_details(ctx);
    }

    fn status_text(&self) -> String {
        format!(
            "viewport {:.0}x{:.0} | renders {}",
            self.scene.viewport.width, self.scene.viewport.height, self.render_count
        )
    }
}
