//! Cell data structures for the roster grid.
//!
//! This module provides the normalized data shape consumed by the engine:
//! - [`CellValue`] - The scalar content of a cell (empty, text, number, or boolean)
//! - [`Cell`] - A value plus the two display annotations (comment, strikethrough)
//! - [`Row`], [`Grid`] - Ordered, position-significant rows of cells

use std::borrow::Cow;

/// The scalar content stored in a cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// A cell in the roster grid.
///
/// Annotations are set at ingestion and never touched by the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub comment: Option<String>,
    pub strike: bool,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    pub fn new_text(text: &str) -> Cell {
        Cell {
            value: CellValue::Text(text.to_string()),
            ..Cell::default()
        }
    }

    pub fn new_number(n: f64) -> Cell {
        Cell {
            value: CellValue::Number(n),
            ..Cell::default()
        }
    }

    pub fn new_bool(b: bool) -> Cell {
        Cell {
            value: CellValue::Bool(b),
            ..Cell::default()
        }
    }

    /// Attach a comment. Empty comments are normalized away.
    pub fn with_comment(mut self, comment: &str) -> Cell {
        self.comment = (!comment.is_empty()).then(|| comment.to_string());
        self
    }

    pub fn with_strike(mut self, strike: bool) -> Cell {
        self.strike = strike;
        self
    }

    /// Rendered text of the cell value.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.value {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Number(n) => Cow::Owned(format_number(*n)),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// A cell is blank when it has no value at all or an empty string.
    /// Whitespace-only text still counts as content.
    pub fn is_blank(&self) -> bool {
        match &self.value {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The comment, if present and non-empty.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// One spreadsheet row, left to right. Column position maps to day of week.
pub type Row = Vec<Cell>;

/// The full sheet, top to bottom.
pub type Grid = Vec<Row>;

/// True when every cell in the row is blank (or the row has no cells).
pub fn row_is_blank(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

/// Format a number the way the spreadsheet export renders it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
