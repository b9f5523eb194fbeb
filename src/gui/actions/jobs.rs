// src/gui/actions/jobs.rs
//
// Request buttons. Each click runs one controller operation on a worker
// thread; the worker writes into the shared board through GuiView. A newer
// click supersedes the job in flight, so a hanging request never locks the
// buttons. Scrape → reload stays ordered inside its own worker.

use std::{sync::Arc, thread};

use eframe::egui;

use crate::{
    api::ApiClient,
    controller,
    core::{FetchError, SharedTransport},
    gui::{app::App, view::GuiView},
    view::View,
};

type Job<T> = fn(&ApiClient<T>, &mut dyn View) -> Result<usize, FetchError>;

/// "Actualizar datos" (and the initial load).
pub fn refresh<T: SharedTransport>(app: &App<T>, ctx: &egui::Context) {
    spawn(app, ctx, "refresh", controller::load_and_render::<T>);
}

/// "Ejecutar scraping".
pub fn scrape<T: SharedTransport>(app: &App<T>, ctx: &egui::Context) {
    spawn(app, ctx, "scrape", controller::trigger_scrape::<T>);
}

fn spawn<T: SharedTransport>(app: &App<T>, ctx: &egui::Context, name: &'static str, job: Job<T>) {
    let generation = lock!(app.board).begin();
    logd!("Job: {} #{} started", name, generation);

    let api = Arc::clone(&app.api);
    let board = Arc::clone(&app.board);
    let ctx = ctx.clone();

    let spawned = thread::Builder::new()
        .name(format!("job-{name}-{generation}"))
        .spawn(move || {
            let mut view = GuiView::new(Arc::clone(&board), ctx.clone(), generation);
            match job(&api, &mut view) {
                Ok(n) => logd!("Job: {} #{} done, rows={}", name, generation, n),
                Err(e) => logd!("Job: {} #{} failed: {}", name, generation, e),
            }
            lock!(board).finish(generation);
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        loge!("Job: {} could not start: {}", name, e);
        lock!(app.board).finish(generation);
    }
}
