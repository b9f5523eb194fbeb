// src/gui/view.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    data::TableRow,
    view::{PageState, View},
};

/// Shared page state. Workers write here, the UI thread reads it every frame.
///
/// Every started job takes a new `generation`. Only the newest job may write,
/// so a click always supersedes a request that is still hanging.
#[derive(Debug, Default)]
pub struct Board {
    pub page: PageState,
    pub generation: u64,
    /// The newest job has not finished yet (spinner).
    pub busy: bool,
}

impl Board {
    /// Start a job: supersede whatever is in flight and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.busy = true;
        self.generation
    }

    /// A job finished. Stale jobs leave the flag alone.
    pub fn finish(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.busy = false;
        }
    }

    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// `View` handed to a worker thread. Writes from a superseded job are dropped;
/// every accepted write asks egui for a repaint.
pub struct GuiView {
    board: Arc<Mutex<Board>>,
    ctx: egui::Context,
    generation: u64,
}

impl GuiView {
    pub fn new(board: Arc<Mutex<Board>>, ctx: egui::Context, generation: u64) -> Self {
        Self { board, ctx, generation }
    }

    fn write(&self, f: impl FnOnce(&mut PageState)) {
        {
            let mut board = lock!(self.board);
            if !board.is_current(self.generation) {
                logd!("View: dropped write from stale job #{}", self.generation);
                return;
            }
            f(&mut board.page);
        }
        self.ctx.request_repaint();
    }
}

impl View for GuiView {
    fn set_message(&mut self, msg: &str) {
        self.write(|page| page.set_message(msg));
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.write(move |page| page.replace_rows(rows));
    }
}
