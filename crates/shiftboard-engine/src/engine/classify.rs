//! Row and cell classification.
//!
//! The shift grouper never looks at raw rows directly: each row is first
//! reduced to a [`RowClass`] here, and the grouping rules only consume classes.

use super::cell::Cell;
use super::patterns::{MIN_LABEL_CHARS, SHIFT_TYPES, has_time_range, is_iso_date, shift_type_in};

/// What a week row contributes to shift grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowClass {
    /// Opens a new shift block with the given name.
    Label(String),
    /// Belongs to the currently open block.
    Data,
    /// Carries nothing; dropped.
    Blank,
}

/// Trimmed first-column text, if any.
pub fn anchored_label(row: &[Cell]) -> Option<String> {
    let first = row.first()?;
    let text = first.text();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// True if any cell in the row holds a time range like `7:00 - 15:00`.
pub fn row_has_time_range(row: &[Cell]) -> bool {
    row.iter().any(|cell| has_time_range(&cell.text()))
}

/// The first shift-type name found in any cell of the row.
pub fn row_shift_type(row: &[Cell]) -> Option<&'static str> {
    row.iter().find_map(|cell| shift_type_in(&cell.text()))
}

/// Classify one row of a week's body.
///
/// A row with first-column text opens a block when that text names a shift
/// type, or when the row has no time range and the text is longer than
/// [`MIN_LABEL_CHARS`]. Otherwise a time range or first-column text makes it
/// data.
pub fn classify_row(row: &[Cell]) -> RowClass {
    let label = anchored_label(row);
    let has_time = row_has_time_range(row);

    match label {
        Some(label)
            if shift_type_in(&label).is_some()
                || (!has_time && label.chars().count() > MIN_LABEL_CHARS) =>
        {
            RowClass::Label(label)
        }
        Some(_) => RowClass::Data,
        None if has_time => RowClass::Data,
        None => RowClass::Blank,
    }
}

/// True if the text looks like a staff member's name and may be highlighted.
pub fn is_name_cell(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && !is_iso_date(trimmed)
        && !SHIFT_TYPES.contains(&trimmed)
        && trimmed.chars().count() > 2
}
