// src/gui/components/settings_bar.rs
use eframe::egui;

use crate::{
    core::SharedTransport,
    gui::{actions, app::App},
};

pub fn draw<T: SharedTransport>(ui: &mut egui::Ui, app: &mut App<T>) {
    let ctx = ui.ctx().clone();
    let mut save_clicked = false;

    ui.horizontal(|ui| {
        ui.label("API:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.api_base_text)
                .hint_text(app.api.base())
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Guardar").on_hover_text("Guardar la URL base de la API").clicked() || enter {
            save_clicked = true;
        }
    });

    if save_clicked {
        actions::save_settings(app, &ctx);
    }
}
