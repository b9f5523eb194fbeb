// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    config::consts::{MSG_COPIED, MSG_NOTHING_TO_COPY},
    csv::{self, Delim},
    core::SharedTransport,
    gui::app::App,
};

pub fn copy<T: SharedTransport>(app: &App<T>, ui_ctx: &egui::Context) {
    let txt = {
        let board = lock!(app.board);
        if board.page.rows.is_empty() {
            None
        } else {
            logf!("Copy: rows={}", board.page.rows.len());
            Some(csv::table_to_string(&board.page.rows, true, Delim::Tsv))
        }
    };

    match txt {
        Some(txt) => {
            ui_ctx.copy_text(txt);
            app.message(MSG_COPIED);
        }
        None => {
            logd!("Copy: Clicked, but there's nothing to copy");
            app.message(MSG_NOTHING_TO_COPY);
        }
    }
}
