//! Week segmentation.
//!
//! A sheet holds several weeks stacked vertically; each starts at a row whose
//! text contains [`WEEK_MARKER`]. The resulting segments always partition the
//! grid: rows above the first marker are folded into week 0. Header and date
//! detection still scan from each week's marker row.

use std::ops::Range;

use super::cell::Row;
use super::dates::extract_date_range;
use super::patterns::{DEFAULT_WEEK_TITLE, WEEK_MARKER};

/// One week's half-open row range plus its derived labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekSegment {
    pub start: usize,
    pub end: usize,
    /// Row of the week's marker. Equals `start` except for a week 0 with rows above it.
    pub marker_row: usize,
    pub title: String,
    pub date_range_label: String,
}

impl WeekSegment {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn rows<'a>(&self, grid: &'a [Row]) -> &'a [Row] {
        &grid[self.start.min(grid.len())..self.end.min(grid.len())]
    }

    /// Rows from the marker on: what the header, date and shift heuristics scan.
    pub fn marked_rows<'a>(&self, grid: &'a [Row]) -> &'a [Row] {
        let end = self.end.min(grid.len());
        &grid[self.marker_row.min(end)..end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

fn row_has_marker(row: &Row) -> bool {
    row.iter().any(|cell| cell.text().contains(WEEK_MARKER))
}

/// Row indices where a new week starts.
///
/// Never empty: with no marker the whole grid is one week starting at row 0.
pub fn find_week_separators(grid: &[Row]) -> Vec<usize> {
    let mut separators: Vec<usize> = grid
        .iter()
        .enumerate()
        .filter(|(_, row)| row_has_marker(row))
        .map(|(i, _)| i)
        .collect();

    if separators.is_empty() {
        tracing::debug!("no week markers found, treating sheet as a single week");
        separators.push(0);
    }
    separators
}

/// Convert separators into contiguous row ranges covering `[0, len)`.
pub fn week_bounds(separators: &[usize], len: usize) -> Vec<Range<usize>> {
    let mut bounds = marked_bounds(separators, len);
    if let Some(first) = bounds.first_mut() {
        first.start = 0;
    }
    bounds
}

/// Each week's rows starting at its own marker row; rows above the first
/// marker belong to no range.
pub fn marked_bounds(separators: &[usize], len: usize) -> Vec<Range<usize>> {
    if separators.is_empty() {
        return vec![0..len];
    }
    separators
        .iter()
        .enumerate()
        .map(|(i, &sep)| {
            let start = sep.min(len);
            let end = separators.get(i + 1).copied().unwrap_or(len).min(len);
            start..end.max(start)
        })
        .collect()
}

/// The week's heading: the first cell text containing the marker.
pub fn week_title(rows: &[Row]) -> String {
    rows.iter()
        .flat_map(|row| row.iter())
        .map(|cell| cell.text())
        .find(|text| text.contains(WEEK_MARKER))
        .map(|text| text.into_owned())
        .unwrap_or_else(|| DEFAULT_WEEK_TITLE.to_string())
}

/// Split the grid into labeled week segments.
pub fn week_segments(grid: &[Row]) -> Vec<WeekSegment> {
    let separators = find_week_separators(grid);
    week_bounds(&separators, grid.len())
        .into_iter()
        .zip(marked_bounds(&separators, grid.len()))
        .map(|(range, marked)| {
            let rows = &grid[marked.clone()];
            WeekSegment {
                start: range.start,
                end: range.end,
                marker_row: marked.start,
                title: week_title(rows),
                date_range_label: extract_date_range(rows),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cell::Cell;

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|s| Cell::new_text(s)).collect()
    }

    fn marker_row() -> Row {
        text_row(&["", "ACR Operations Shift Schedule"])
    }

    #[test]
    fn test_separators_found_in_order() {
        let grid = vec![
            marker_row(),
            text_row(&["a"]),
            marker_row(),
            text_row(&["b"]),
            text_row(&["c"]),
            marker_row(),
        ];
        assert_eq!(find_week_separators(&grid), vec![0, 2, 5]);
    }

    #[test]
    fn test_row_with_two_markers_counts_once() {
        let grid = vec![text_row(&[
            "Operations Shift Schedule",
            "Operations Shift Schedule",
        ])];
        assert_eq!(find_week_separators(&grid), vec![0]);
    }

    #[test]
    fn test_no_marker_is_single_week() {
        let grid = vec![text_row(&["a"]), text_row(&["b"])];
        assert_eq!(find_week_separators(&grid), vec![0]);
        let segments = week_segments(&grid);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].range(), 0..2);
        assert_eq!(segments[0].title, DEFAULT_WEEK_TITLE);
    }

    #[test]
    fn test_empty_grid_is_one_empty_week() {
        let segments = week_segments(&[]);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_empty());
    }

    #[test]
    fn test_preamble_folds_into_first_week() {
        let grid = vec![
            text_row(&["printed 2024-06-01"]),
            marker_row(),
            text_row(&["a"]),
            marker_row(),
        ];
        let bounds = week_bounds(&find_week_separators(&grid), grid.len());
        assert_eq!(bounds, vec![0..3, 3..4]);
    }

    #[test]
    fn test_preamble_does_not_push_dates_out_of_scan_window() {
        let mut grid: Vec<Row> = (0..6).map(|i| text_row(&[format!("note {}", i).as_str()])).collect();
        grid.push(marker_row());
        for _ in 0..6 {
            grid.push(text_row(&[""]));
        }
        grid.push(text_row(&["", "2024-06-03T00:00:00", "2024-06-09T00:00:00"]));

        let segments = week_segments(&grid);
        assert_eq!(segments[0].range(), 0..grid.len());
        assert_eq!(segments[0].marker_row, 6);
        assert_eq!(segments[0].marked_rows(&grid).len(), 8);
        assert_eq!(segments[0].date_range_label, "06-03 through 06-09");
    }

    #[test]
    fn test_week_title_uses_marker_text() {
        let grid = vec![marker_row(), text_row(&["a"])];
        let segments = week_segments(&grid);
        assert_eq!(segments[0].title, "ACR Operations Shift Schedule");
    }

    #[test]
    fn test_numeric_cells_never_match_marker() {
        let grid = vec![vec![Cell::new_number(2024.0)], marker_row()];
        assert_eq!(find_week_separators(&grid), vec![1]);
    }
}
