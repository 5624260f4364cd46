use super::Roster;
use shiftboard_engine::engine::{
    Cell, ClickTarget, CommentAddress, RowKind, group_by_shift, is_name_cell,
};

impl Roster {
    /// Show week `index`. Out of range or already shown is a no-op.
    ///
    /// Returns true if the displayed week changed.
    pub fn go_to_week(&mut self, index: usize) -> bool {
        if index >= self.total_weeks() || index == self.derived.selected_week {
            return false;
        }
        let segment = &self.derived.segments[index];
        self.derived.blocks = group_by_shift(segment.marked_rows(&self.grid));
        self.derived.selected_week = index;
        self.interaction.week_changed();
        tracing::debug!(week = index, blocks = self.derived.blocks.len(), "selected week");
        true
    }

    pub fn go_to_next(&mut self) -> bool {
        self.go_to_week(self.derived.selected_week + 1)
    }

    pub fn go_to_previous(&mut self) -> bool {
        match self.derived.selected_week.checked_sub(1) {
            Some(prev) => self.go_to_week(prev),
            None => false,
        }
    }

    /// Jump back to the week containing today. Always closes the tooltip.
    pub fn go_to_current_week(&mut self) {
        let today = self.derived.today_week;
        if !self.go_to_week(today) {
            self.interaction.week_changed();
        }
    }

    /// The displayed cell at `address`, if the selected week has one there.
    pub fn cell_at(&self, address: CommentAddress) -> Option<&Cell> {
        let block = self.derived.blocks.get(address.block)?;
        let row = match address.kind {
            RowKind::Header => block.header_rows.get(address.row)?,
            RowKind::Content => block.content_rows.get(address.row)?,
        };
        row.get(address.cell)
    }

    /// Open or close the comment tooltip of the cell at `address`.
    ///
    /// Cells without a comment leave the tooltip as it is.
    pub fn toggle_comment(&mut self, address: CommentAddress) {
        let Some(comment) = self.cell_at(address).and_then(Cell::comment) else {
            return;
        };
        let comment = comment.to_string();
        self.interaction.comment.click(address, &comment);
    }

    pub fn click_outside(&mut self, target: &ClickTarget) {
        self.interaction.comment.click_outside(target);
    }

    /// Toggle the highlight for the name in the cell at `address`.
    ///
    /// Returns false when the cell does not hold a staff name.
    pub fn select_name(&mut self, address: CommentAddress) -> bool {
        let Some(cell) = self.cell_at(address) else {
            return false;
        };
        let text = cell.text().into_owned();
        if !is_name_cell(&text) {
            return false;
        }
        self.interaction.highlight.activate(&text);
        tracing::debug!(name = ?self.interaction.highlight.selected(), "name highlight");
        true
    }

    pub fn clear_selection(&mut self) {
        self.interaction.highlight.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::Roster;
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftboard_engine::engine::{Cell, ClickTarget, CommentAddress, Grid, Row};

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|s| Cell::new_text(s)).collect()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn week(monday: &str, sunday: &str, day_staff: &str) -> Grid {
        vec![
            text_row(&["", "Operations Shift Schedule"]),
            text_row(&["", &format!("{monday}T00:00:00"), "", &format!("{sunday}T00:00:00")]),
            text_row(&["", "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat", "Sun"]),
            text_row(&["", "Meal Periods"]),
            text_row(&["Day Shift"]),
            vec![
                Cell::new_empty(),
                Cell::new_text("7:00 - 15:00"),
                Cell::new_text(day_staff).with_comment("covering"),
                Cell::new_text("Jones"),
            ],
        ]
    }

    fn three_weeks() -> Grid {
        let mut grid = week("2024-06-03", "2024-06-09", "Smith");
        grid.extend(week("2024-06-10", "2024-06-16", "Patel"));
        grid.extend(week("2024-06-17", "2024-06-23", "Smith"));
        grid
    }

    #[test]
    fn test_opens_on_todays_week() {
        let roster = Roster::from_grid(three_weeks(), at(2024, 6, 12));
        assert_eq!(roster.total_weeks(), 3);
        assert_eq!(roster.current_week_index(), 1);
        assert_eq!(roster.selected_week(), 1);
        assert_eq!(roster.shift_blocks()[0].content_rows[0][2].text(), "Patel");
    }

    #[test]
    fn test_navigation_boundaries_are_noops() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        assert!(!roster.go_to_previous());
        assert_eq!(roster.selected_week(), 0);
        assert!(roster.go_to_next());
        assert!(roster.go_to_next());
        assert!(!roster.go_to_next());
        assert_eq!(roster.selected_week(), 2);
        roster.go_to_current_week();
        assert_eq!(roster.selected_week(), 0);
    }

    #[test]
    fn test_navigation_clears_comment_keeps_highlight() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        let smith = CommentAddress::content(0, 0, 2);
        roster.toggle_comment(smith);
        assert_eq!(roster.interaction().comment.text(), Some("covering"));
        assert!(roster.select_name(smith));

        roster.go_to_next();
        assert!(!roster.interaction().comment.is_shown());
        assert_eq!(roster.interaction().highlight.selected(), Some("Smith"));
    }

    #[test]
    fn test_current_week_always_closes_tooltip() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        roster.toggle_comment(CommentAddress::content(0, 0, 2));
        roster.go_to_current_week();
        assert!(!roster.interaction().comment.is_shown());
    }

    #[test]
    fn test_toggle_comment_ignores_plain_cells() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        roster.toggle_comment(CommentAddress::content(0, 0, 3));
        assert!(!roster.interaction().comment.is_shown());
        roster.toggle_comment(CommentAddress::content(7, 0, 0));
        assert!(!roster.interaction().comment.is_shown());
    }

    #[test]
    fn test_click_outside_closes_tooltip() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        let smith = CommentAddress::content(0, 0, 2);
        roster.toggle_comment(smith);
        roster.click_outside(&ClickTarget::Cell(smith));
        assert!(roster.interaction().comment.is_shown());
        roster.click_outside(&ClickTarget::Elsewhere);
        assert!(!roster.interaction().comment.is_shown());
    }

    #[test]
    fn test_select_name_rejects_non_names() {
        let mut grid = three_weeks();
        grid[5].push(Cell::new_text("Al"));
        grid[5].push(Cell::new_text("2024-06-05T00:00:00"));
        let mut roster = Roster::from_grid(grid, at(2024, 6, 4));

        // blank, too short, date
        assert!(!roster.select_name(CommentAddress::content(0, 0, 0)));
        assert!(!roster.select_name(CommentAddress::content(0, 0, 4)));
        assert!(!roster.select_name(CommentAddress::content(0, 0, 5)));
        assert!(!roster.select_name(CommentAddress::content(0, 0, 99)));
        assert_eq!(roster.interaction().highlight.selected(), None);

        assert!(roster.select_name(CommentAddress::content(0, 0, 2)));
        roster.clear_selection();
        assert_eq!(roster.interaction().highlight.selected(), None);
    }

    #[test]
    fn test_refresh_validates_highlight() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        assert!(roster.select_name(CommentAddress::content(0, 0, 3)));
        assert_eq!(roster.interaction().highlight.selected(), Some("Jones"));

        roster.replace_grid(three_weeks(), at(2024, 6, 4));
        assert_eq!(roster.interaction().highlight.selected(), Some("Jones"));

        let without_jones: Grid = three_weeks()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|c| if c.text() == "Jones" { Cell::new_text("Lee") } else { c })
                    .collect()
            })
            .collect();
        roster.replace_grid(without_jones, at(2024, 6, 4));
        assert_eq!(roster.interaction().highlight.selected(), None);
    }

    #[test]
    fn test_refresh_jumps_to_todays_week_and_closes_tooltip() {
        let mut roster = Roster::from_grid(three_weeks(), at(2024, 6, 4));
        roster.go_to_next();
        roster.toggle_comment(CommentAddress::content(0, 0, 2));
        roster.replace_grid(three_weeks(), at(2024, 6, 20));
        assert_eq!(roster.selected_week(), 2);
        assert!(!roster.interaction().comment.is_shown());
        assert!(roster.last_refresh.is_some());
    }

    #[test]
    fn test_grid_without_marker_is_single_week() {
        let grid = vec![
            text_row(&["", "Mon", "Tues", "Wed"]),
            text_row(&["Day Shift"]),
            text_row(&["", "7:00 - 15:00", "Smith"]),
        ];
        let mut roster = Roster::from_grid(grid, at(2024, 6, 4));
        assert_eq!(roster.total_weeks(), 1);
        assert_eq!(roster.selected_segment().range(), 0..3);
        assert!(!roster.go_to_next());
    }

    #[test]
    fn test_rows_above_first_marker_keep_week_zero_header() {
        let mut grid: Grid = (0..8).map(|_| text_row(&["printed by ops"])).collect();
        grid.extend(week("2024-06-03", "2024-06-09", "Smith"));
        let roster = Roster::from_grid(grid, at(2024, 6, 4));

        assert_eq!(roster.selected_segment().range(), 0..14);
        let view = roster.week_view();
        assert_eq!(view.date_range_label, "06-03 through 06-09");
        assert_eq!(view.shift_blocks.len(), 1);
        assert_eq!(view.shift_blocks[0].shift_name, "Day Shift");
        assert_eq!(view.shift_blocks[0].header_rows[0][1].text(), "Mon");
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new();
        assert_eq!(roster.total_weeks(), 1);
        assert!(roster.shift_blocks().is_empty());
        assert!(roster.last_refresh.is_none());
    }
}
