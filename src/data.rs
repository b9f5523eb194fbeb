// src/data.rs
//
// Row: one record as the API sends it (`GET /data` returns a JSON array of these).
// TableRow: the same record as it is shown, with every default applied.
//
// Rows live for one render pass; the next refresh replaces them wholesale.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

use crate::config::consts::{LINK_LABEL, MISSING_HREF};

/// One scraped record. All fields optional; unknown keys
/// (`Perito`, `Tipo`, `ScrapedAt`, ...) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Row {
    #[serde(rename = "Fecha", default, deserialize_with = "lenient_text")]
    pub fecha: Option<String>,

    #[serde(rename = "Causa", default, deserialize_with = "lenient_text")]
    pub causa: Option<String>,

    #[serde(rename = "Link", default, deserialize_with = "lenient_text")]
    pub link: Option<String>,
}

/// Falsy values (null, "", 0, false) count as missing; other numbers and
/// `true` keep their JSON text.
fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(v @ (Value::Number(_) | Value::Bool(true))) => Ok(Some(v.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

impl Row {
    pub fn render(&self) -> TableRow {
        TableRow {
            fecha: self.fecha.clone().unwrap_or_default(),
            causa: self.causa.clone().unwrap_or_default(),
            href: self.link.clone().unwrap_or_else(|| s!(MISSING_HREF)),
        }
    }
}

/// A rendered table row: Fecha | Causa | link ("Ver" → href).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    pub fecha: String,
    pub causa: String,
    pub href: String,
}

impl TableRow {
    #[inline]
    pub fn link_label(&self) -> &'static str {
        LINK_LABEL
    }

    /// Cells in column order, the link column carrying the href.
    pub fn cells(&self) -> [&str; 3] {
        [self.fecha.as_str(), self.causa.as_str(), self.href.as_str()]
    }
}

/// Decode a `/data` body. Anything but an array of objects is an error.
pub fn decode_rows(body: &str) -> Result<Vec<Row>, serde_json::Error> {
    serde_json::from_str(body)
}

pub fn render_rows(rows: &[Row]) -> Vec<TableRow> {
    rows.iter().map(Row::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_null_and_empty_fields_render_as_defaults() {
        let rows = decode_rows(r#"[{}, {"Fecha": null, "Causa": "", "Link": ""}]"#).unwrap();
        for r in render_rows(&rows) {
            assert_eq!(r.fecha, "");
            assert_eq!(r.causa, "");
            assert_eq!(r.href, "#");
        }
    }

    #[test]
    fn truthy_scalars_keep_their_json_text() {
        let rows = decode_rows(r#"[{"Fecha": 20250102, "Causa": true, "Link": 1.5}]"#).unwrap();
        let r = rows[0].render();
        assert_eq!(r.fecha, "20250102");
        assert_eq!(r.causa, "true");
        assert_eq!(r.href, "1.5");
    }

    #[test]
    fn falsy_scalars_render_as_defaults() {
        let rows = decode_rows(r#"[{"Fecha": 0, "Causa": false, "Link": 0}, {"Link": -0.0}]"#)
            .unwrap();
        let r = rows[0].render();
        assert_eq!(r.cells(), ["", "", "#"]);
        assert_eq!(rows[1].render().href, "#");
    }

    #[test]
    fn backend_extra_keys_are_ignored() {
        let body = r#"[{
            "Perito": "Ana", "Tipo": "NOVEDAD", "Nombre": "X c/ Y",
            "Fecha": "03/04/2025", "Causa": "CIV 1/2025", "Link": "https://pjn/1",
            "Aceptada": false, "Resumen": ""
        }]"#;
        let r = decode_rows(body).unwrap()[0].render();
        assert_eq!(r.cells(), ["03/04/2025", "CIV 1/2025", "https://pjn/1"]);
        assert_eq!(r.link_label(), "Ver");
    }

    #[test]
    fn composite_field_or_non_array_is_rejected() {
        assert!(decode_rows(r#"[{"Causa": {"a": 1}}]"#).is_err());
        assert!(decode_rows(r#"{"Causa": "x"}"#).is_err());
        assert!(decode_rows(r#"[null]"#).is_err());
        assert!(decode_rows("<html>oops</html>").is_err());
    }
}
