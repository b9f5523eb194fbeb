// src/csv.rs
use std::io::{self, Write};

use crate::{config::consts::HEADERS, data::TableRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream the table (optionally with the header line) into `w`.
/// The link column carries the href, not the "Ver" label.
pub fn write_table<W: Write>(
    mut w: W,
    rows: &[TableRow],
    include_headers: bool,
    delim: Delim,
) -> io::Result<()> {
    let sep = delim.sep();
    if include_headers {
        write_row(&mut w, &HEADERS[..], sep)?;
    }
    for r in rows {
        write_row(&mut w, &r.cells()[..], sep)?;
    }
    Ok(())
}

/// Whole table as a string (clipboard path).
pub fn table_to_string(rows: &[TableRow], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, rows, include_headers, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
