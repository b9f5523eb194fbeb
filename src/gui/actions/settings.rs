// src/gui/actions/settings.rs
use eframe::egui;

use crate::{config::consts::MSG_SETTINGS_ERROR, core::SharedTransport, gui::app::App};

/// "Guardar": persist the API base, repoint the client and reload.
/// A blank field clears the saved value so `API_BASE` / the default apply again.
pub fn save_settings<T: SharedTransport>(app: &mut App<T>, ctx: &egui::Context) {
    app.settings.set_api_base(&app.api_base_text);

    match app.settings.save_to(&app.settings_path) {
        Ok(()) => logf!("Settings: Saved → {}", app.settings_path.display()),
        Err(e) => {
            loge!("Settings: Save failed: {}", e);
            app.message(MSG_SETTINGS_ERROR);
            return;
        }
    }

    app.rebuild_client();
    super::refresh(app, ctx);
}
