// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    api::ApiClient,
    config::{Settings, consts::WINDOW_TITLE},
    core::{HttpTransport, SharedTransport},
};

use super::{actions, components, view::Board};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load();
    let transport = HttpTransport::new()?;

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, settings, transport)))),
    )?;
    Ok(())
}

pub struct App<T: SharedTransport = HttpTransport> {
    pub settings: Settings,
    pub settings_path: PathBuf,

    // shared connection pool; cloned into each rebuilt client
    pub transport: T,
    pub api: Arc<ApiClient<T>>,

    // saved API base as typed (blank → API_BASE / default); applied on "Guardar"
    pub api_base_text: String,

    // message + table (workers write here)
    pub board: Arc<Mutex<Board>>,
}

impl<T: SharedTransport> App<T> {
    pub fn new(ctx: &egui::Context, settings: Settings, transport: T) -> Self {
        let api = Arc::new(ApiClient::new(settings.api_base(), transport.clone()));
        logf!("Init: api_base={}", api.base());

        let app = Self {
            api_base_text: settings.api_base.clone().unwrap_or_default(),
            settings,
            settings_path: Settings::default_path(),
            transport,
            api,
            board: Arc::new(Mutex::new(Board::default())),
        };

        // Initial load
        actions::refresh(&app, ctx);
        app
    }

    #[inline]
    pub fn busy(&self) -> bool {
        lock!(self.board).busy
    }

    #[inline]
    pub fn message<S: AsRef<str>>(&self, msg: S) {
        lock!(self.board).page.message = s!(msg.as_ref());
    }

    /// Point the client at whatever base the settings now resolve to.
    pub fn rebuild_client(&mut self) {
        let api = ApiClient::new(self.settings.api_base(), self.transport.clone());
        logf!("Settings: api_base → {}", api.base());
        self.api_base_text = self.settings.api_base.clone().unwrap_or_default();
        self.api = Arc::new(api);
    }
}

impl<T: SharedTransport> eframe::App for App<T> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            components::settings_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
