//! Text markers and patterns recognized in roster sheets.
//!
//! Every threshold here is part of the segmentation contract: changing one
//! changes how real sheets are split.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Substring that marks the first row of every week.
pub const WEEK_MARKER: &str = "Operations Shift Schedule";

/// Title used when a week has no marker cell.
pub const DEFAULT_WEEK_TITLE: &str = "Weekly Operations Shift Schedule";

/// Cell text that bounds the header region of a week.
pub const MEAL_PERIODS_ANCHOR: &str = "Meal Periods";

/// Name given to blocks that cannot be attributed to a labeled shift.
pub const DEFAULT_BLOCK_NAME: &str = "Schedule";

pub const WEEKDAY_TOKENS: [&str; 7] = ["Mon", "Tues", "Wed", "Thurs", "Fri", "Sat", "Sun"];

pub const SHIFT_TYPES: [&str; 3] = ["Owl Shift", "Day Shift", "Swing Shift"];

/// Rows at the top of a week searched for the days-of-week row.
pub const DAYS_ROW_SCAN_ROWS: usize = 10;

/// Rows at the top of a week searched for ISO dates.
pub const DATE_SCAN_ROWS: usize = 10;

/// Rows searched for the "Meal Periods" anchor, starting at the days row.
pub const ANCHOR_SCAN_ROWS: usize = 5;

pub const MIN_WEEKDAY_MATCHES: usize = 3;

/// A label must be strictly longer than this (in chars) to open a block on its own.
pub const MIN_LABEL_CHARS: usize = 3;

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})T00:00:00").unwrap())
}

fn time_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2}").unwrap())
}

/// True if the text contains an ISO midnight timestamp (`YYYY-MM-DDT00:00:00`),
/// whether or not it names a real calendar day.
pub fn is_iso_date(text: &str) -> bool {
    iso_date_re().is_match(text)
}

/// Parse the first ISO midnight timestamp in the text.
///
/// Returns `None` when there is no match or the match is not a valid date
/// (e.g. `2024-13-40T00:00:00`).
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let caps = iso_date_re().captures(text)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True if the text contains a time range such as `7:00 - 15:30`.
pub fn has_time_range(text: &str) -> bool {
    time_range_re().is_match(text)
}

/// The first shift-type name contained in the text.
pub fn shift_type_in(text: &str) -> Option<&'static str> {
    SHIFT_TYPES.iter().copied().find(|t| text.contains(t))
}

pub fn is_weekday_token(text: &str) -> bool {
    WEEKDAY_TOKENS.contains(&text)
}
