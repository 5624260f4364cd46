//! Read-only snapshot of the selected week for renderers.

use std::ops::RangeInclusive;

use super::Roster;
use shiftboard_engine::engine::{
    Cell, InteractionState, Row, RowKind, SHIFT_TYPES, ShiftBlock, anchored_label,
    format_display_date,
};

/// Sheet columns shown to the user. Column 0 holds shift labels and is hidden.
pub const DISPLAY_COLUMNS: RangeInclusive<usize> = 1..=8;

/// What a renderer needs to draw one week.
#[derive(Clone, Copy, Debug)]
pub struct WeekView<'a> {
    pub total_weeks: usize,
    /// Week containing today.
    pub current_week_index: usize,
    pub selected_week: usize,
    pub week_header: &'a str,
    pub date_range_label: &'a str,
    pub shift_blocks: &'a [ShiftBlock],
    pub interaction: &'a InteractionState,
}

impl WeekView<'_> {
    pub fn is_current_week(&self) -> bool {
        self.selected_week == self.current_week_index
    }
}

impl Roster {
    pub fn week_view(&self) -> WeekView<'_> {
        let segment = self.selected_segment();
        WeekView {
            total_weeks: self.total_weeks(),
            current_week_index: self.current_week_index(),
            selected_week: self.selected_week(),
            week_header: &segment.title,
            date_range_label: &segment.date_range_label,
            shift_blocks: self.shift_blocks(),
            interaction: &self.interaction,
        }
    }
}

/// Text shown for a cell. ISO dates become `MM-DD`; shift-type names in
/// content rows are blanked since the block title already shows them.
pub fn display_text(cell: &Cell, kind: RowKind) -> String {
    let text = cell.text();
    if kind == RowKind::Content && SHIFT_TYPES.contains(&text.trim()) {
        return String::new();
    }
    format_display_date(&text).into_owned()
}

/// Content rows with first-column text get a rule drawn above them.
pub fn is_divider_row(row: &Row) -> bool {
    anchored_label(row).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Roster;
    use chrono::NaiveDate;

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|s| Cell::new_text(s)).collect()
    }

    #[test]
    fn test_display_text() {
        let date = Cell::new_text("2024-06-05T00:00:00");
        assert_eq!(display_text(&date, RowKind::Header), "06-05");
        let shift = Cell::new_text("Owl Shift");
        assert_eq!(display_text(&shift, RowKind::Content), "");
        assert_eq!(display_text(&shift, RowKind::Header), "Owl Shift");
        assert_eq!(display_text(&Cell::new_number(7.0), RowKind::Content), "7");
    }

    #[test]
    fn test_divider_rows() {
        assert!(is_divider_row(&text_row(&["Relief", "Smith"])));
        assert!(!is_divider_row(&text_row(&["  ", "Smith"])));
        assert!(!is_divider_row(&Row::new()));
    }

    #[test]
    fn test_week_view_labels() {
        let grid = vec![
            text_row(&["", "ACR Operations Shift Schedule"]),
            text_row(&["", "2024-06-03T00:00:00", "", "2024-06-09T00:00:00"]),
            text_row(&["", "Mon", "Tues", "Wed"]),
            text_row(&["Day Shift"]),
            text_row(&["", "7:00 - 15:00", "Smith"]),
        ];
        let now = NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let roster = Roster::from_grid(grid, now);
        let view = roster.week_view();
        assert_eq!(view.week_header, "ACR Operations Shift Schedule");
        assert_eq!(view.date_range_label, "06-03 through 06-09");
        assert!(view.is_current_week());
        assert_eq!(view.shift_blocks.len(), 1);
    }
}
