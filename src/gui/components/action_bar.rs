// src/gui/components/action_bar.rs
use eframe::egui::{self, RichText, widgets::Spinner};

use crate::{
    core::SharedTransport,
    gui::{actions, app::App},
};

/// Request buttons stay clickable while a job runs; a new click supersedes it.
pub fn draw<T: SharedTransport>(ui: &mut egui::Ui, app: &App<T>) {
    let ctx = ui.ctx().clone();
    let busy = app.busy();
    let message = lock!(app.board).page.message.clone();

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let run =
            egui::Button::new(RichText::new("Ejecutar scraping").color(black).strong()).fill(red);
        if ui.add(run).clicked() {
            actions::scrape(app, &ctx);
        }

        if ui.button("Actualizar datos").clicked() {
            actions::refresh(app, &ctx);
        }

        if ui.button("Copiar").on_hover_text("Copiar la tabla como TSV").clicked() {
            actions::copy(app, &ctx);
        }

        if busy {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(message);
    });
}
