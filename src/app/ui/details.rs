use eframe::egui::{self, Align2, Context, Key, RichText, Ui, vec2};

use crate::util::emphasis_spans;

use super::super::GalaxyApp;
use super::super::panel::PanelContent;

impl GalaxyApp {
    pub(in crate::app) fn draw_details(&mut self, ctx: &Context) {
        if !self.panel.is_visible() {
            return;
        }

        if ctx.input(|input| input.key_pressed(Key::Escape)) {
            self.dismiss_details();
            return;
        }

        let Some(content) = self.panel.content().cloned() else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(RichText::new(content.title.as_str()).strong())
            .id(egui::Id::new("detail_panel"))
            .open(&mut open)
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
            .default_width(380.0)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(520.0)
                    .show(ui, |ui| draw_panel_content(ui, &content));

                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.dismiss_details();
        }
    }
}

fn draw_panel_content(ui: &mut Ui, content: &PanelContent) {
    ui.label(content.description.as_str());

    if !content.key_points.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new("Key points").strong());
        for point in &content.key_points {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label("•  ");
                for (text, strong) in emphasis_spans(point) {
                    let text = RichText::new(text);
                    ui.label(if strong { text.strong() } else { text });
                }
            });
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new(content.quote.as_str()).italics());
}
