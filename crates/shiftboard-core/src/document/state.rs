use chrono::{DateTime, Local, NaiveDateTime};
use shiftboard_engine::engine::{
    Grid, InteractionState, ShiftBlock, WeekSegment, find_current_week, find_week_separators,
    group_by_shift, is_name_cell, week_segments,
};

/// Everything computed from a grid, replaced in one assignment.
#[derive(Clone, Debug, Default)]
pub(crate) struct Derived {
    pub(crate) segments: Vec<WeekSegment>,
    /// Week containing "now" at the time the grid was loaded.
    pub(crate) today_week: usize,
    pub(crate) selected_week: usize,
    /// Shift blocks of the selected week.
    pub(crate) blocks: Vec<ShiftBlock>,
}

impl Derived {
    pub(crate) fn compute(grid: &Grid, now: NaiveDateTime) -> Self {
        let separators = find_week_separators(grid);
        let segments = week_segments(grid);
        let today_week = find_current_week(grid, &separators, now).min(segments.len() - 1);
        let blocks = group_by_shift(segments[today_week].marked_rows(grid));
        tracing::debug!(
            weeks = segments.len(),
            today_week,
            blocks = blocks.len(),
            "recomputed roster"
        );
        Derived {
            segments,
            today_week,
            selected_week: today_week,
            blocks,
        }
    }
}

/// UI-agnostic roster document.
///
/// Holds the current grid, the state derived from it, and the interaction
/// overlay. Renderers only read from it; all changes go through its methods.
pub struct Roster {
    /// The current sheet, replaced wholesale on every refresh.
    pub(crate) grid: Grid,
    /// Name of the sheet the grid came from.
    pub sheet_name: Option<String>,
    pub(crate) derived: Derived,
    pub(crate) interaction: InteractionState,
    /// When the grid was last replaced.
    pub last_refresh: Option<DateTime<Local>>,
}

impl Roster {
    /// An empty roster: one empty week, no blocks.
    pub fn new() -> Self {
        let grid = Grid::new();
        let derived = Derived::compute(&grid, Local::now().naive_local());
        Roster {
            grid,
            sheet_name: None,
            derived,
            interaction: InteractionState::new(),
            last_refresh: None,
        }
    }

    pub fn from_grid(grid: Grid, now: NaiveDateTime) -> Self {
        let mut roster = Self::new();
        roster.replace_grid(grid, now);
        roster
    }

    /// Swap in a freshly fetched grid and jump to the week containing `now`.
    ///
    /// The comment tooltip is closed. The highlighted name is kept only if it
    /// still appears in the new grid.
    pub fn replace_grid(&mut self, grid: Grid, now: NaiveDateTime) {
        let derived = Derived::compute(&grid, now);
        self.grid = grid;
        self.derived = derived;
        self.interaction.week_changed();

        if let Some(name) = self.interaction.highlight.selected()
            && !grid_contains_name(&self.grid, name)
        {
            tracing::debug!(name, "highlighted name no longer present, clearing");
            self.interaction.highlight.clear();
        }
        self.last_refresh = Some(Local::now());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn total_weeks(&self) -> usize {
        self.derived.segments.len()
    }

    /// The week containing today.
    pub fn current_week_index(&self) -> usize {
        self.derived.today_week
    }

    /// The week being displayed.
    pub fn selected_week(&self) -> usize {
        self.derived.selected_week
    }

    pub fn shift_blocks(&self) -> &[ShiftBlock] {
        &self.derived.blocks
    }

    pub fn selected_segment(&self) -> &WeekSegment {
        &self.derived.segments[self.derived.selected_week]
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

fn grid_contains_name(grid: &Grid, name: &str) -> bool {
    grid.iter().flatten().any(|cell| {
        let text = cell.text();
        is_name_cell(&text) && text.trim() == name
    })
}
