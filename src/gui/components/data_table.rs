// src/gui/components/data_table.rs
//
// Draws the live table: Fecha | Causa | Link. Purely a view over the board.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::HEADERS, core::SharedTransport, gui::app::App};

pub fn draw<T: SharedTransport>(ui: &mut egui::Ui, app: &App<T>) {
    let board = lock!(app.board);
    let rows = &board.page.rows;

    let avail_h = ui.available_height();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(110.0).at_least(60.0).clip(true))
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::exact(48.0))
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };

                row.col(|ui| {
                    ui.label(r.fecha.as_str());
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(r.causa.as_str()).on_hover_text(r.causa.as_str());
                });
                row.col(|ui| {
                    let link = egui::Hyperlink::from_label_and_url(r.link_label(), r.href.as_str())
                        .open_in_new_tab(true);
                    ui.add(link).on_hover_text(r.href.as_str());
                });
            });
        });
}
