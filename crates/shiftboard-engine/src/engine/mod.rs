//! Roster engine API.
//!
//! This module turns a raw spreadsheet grid into a weekly roster:
//!
//! - [`Cell`], [`CellValue`], [`Row`], [`Grid`] - Normalized cell data
//! - [`find_week_separators`], [`week_segments`] - Split a sheet into weeks
//! - [`extract_date_range`], [`find_current_week`] - Week dates and "today"
//! - [`classify_row`], [`group_by_shift`] - Split a week into shift blocks
//! - [`InteractionState`] - Comment tooltip and name highlight state

mod cell;
mod classify;
mod dates;
mod interaction;
mod patterns;
mod segment;
mod shifts;

pub use cell::{Cell, CellValue, Grid, Row, format_number, row_is_blank};
pub use classify::{RowClass, anchored_label, classify_row, is_name_cell, row_has_time_range, row_shift_type};
pub use dates::{
    extract_date_range, find_current_week, format_display_date, format_month_day, is_same_day,
    week_span,
};
pub use interaction::{
    ClickTarget, ClickTracker, CommentAddress, CommentState, DOUBLE_CLICK, InteractionState,
    LONG_PRESS, NameHighlight, PressTracker, RowKind, col_to_letters,
};
pub use patterns::{
    DEFAULT_BLOCK_NAME, DEFAULT_WEEK_TITLE, SHIFT_TYPES, WEEK_MARKER, WEEKDAY_TOKENS, is_iso_date,
    parse_iso_date,
};
pub use segment::{
    WeekSegment, find_week_separators, marked_bounds, week_bounds, week_segments, week_title,
};
pub use shifts::{ShiftBlock, find_anchor_row, find_days_row, group_by_shift};
