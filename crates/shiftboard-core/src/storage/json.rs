//! Schedule payload ingestion.
//!
//! The export looks like:
//!
//! ```json
//! { "sheets": [ { "name": "2024", "data": [ ["", "Mon", {"value": "Smith", "comment": "swap", "strike": true}] ] } ] }
//! ```
//!
//! Only the first sheet is used. Cells are either bare scalars or objects with
//! a `value` and optional `comment`/`strike` annotations.

use crate::error::{Result, RosterError};
use serde_json::Value;
use shiftboard_engine::engine::{Cell, CellValue, Grid, Row};

/// The first sheet of a schedule payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub name: Option<String>,
    pub grid: Grid,
}

/// Parse a schedule payload into its first sheet.
pub fn parse_schedule(json: &str) -> Result<Sheet> {
    let payload: Value = serde_json::from_str(json)?;

    let Some(first) = payload
        .get("sheets")
        .and_then(Value::as_array)
        .and_then(|sheets| sheets.first())
    else {
        if let Some(message) = payload.get("error").and_then(Value::as_str) {
            return Err(RosterError::FetchFailed(message.to_string()));
        }
        return Err(RosterError::NoSheetsFound);
    };

    let name = first.get("name").and_then(Value::as_str).map(str::to_string);
    let grid: Grid = first
        .get("data")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(parse_row).collect())
        .unwrap_or_default();

    tracing::debug!(rows = grid.len(), sheet = ?name, "parsed schedule sheet");
    Ok(Sheet { name, grid })
}

/// Parse one row. Anything that is not an array becomes an empty row so row
/// positions stay aligned with the sheet.
pub(crate) fn parse_row(value: &Value) -> Row {
    match value.as_array() {
        Some(cells) => cells.iter().map(parse_cell).collect(),
        None => {
            tracing::debug!("skipping malformed row");
            Row::new()
        }
    }
}

fn parse_scalar(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Array(_) | Value::Object(_) => {
            tracing::debug!("skipping malformed cell value");
            CellValue::Empty
        }
    }
}

/// Parse one cell: a scalar, or `{value, comment?, strike?}`.
pub(crate) fn parse_cell(value: &Value) -> Cell {
    let Value::Object(map) = value else {
        return Cell {
            value: parse_scalar(value),
            ..Cell::default()
        };
    };

    let cell = Cell {
        value: map.get("value").map_or(CellValue::Empty, parse_scalar),
        ..Cell::default()
    };
    let comment = map.get("comment").and_then(Value::as_str).unwrap_or("");
    let strike = map.get("strike").and_then(Value::as_bool).unwrap_or(false);
    cell.with_comment(comment).with_strike(strike)
}
