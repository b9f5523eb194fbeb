// src/view.rs
//
// What the page shows: a message area and a table body.
// Operations in `controller` write through this sink; the GUI, the CLI and
// the tests each provide their own.

use crate::data::TableRow;

pub trait View {
    /// Replace the message area text. "" clears it.
    fn set_message(&mut self, msg: &str);

    /// Drop every rendered row and show `rows` instead.
    fn replace_rows(&mut self, rows: Vec<TableRow>);
}

/// Plain in-memory page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub message: String,
    pub rows: Vec<TableRow>,
}

impl View for PageState {
    fn set_message(&mut self, msg: &str) {
        self.message.clear();
        self.message.push_str(msg);
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
    }
}
