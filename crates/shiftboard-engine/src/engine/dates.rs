//! Date range extraction and current-week resolution.
//!
//! Roster weeks carry their dates as ISO midnight timestamps
//! (`2024-06-03T00:00:00`) near the top of the week, usually one per weekday
//! column. Only the first [`DATE_SCAN_ROWS`] rows of a week are inspected.

use std::borrow::Cow;

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};

use super::cell::Row;
use super::patterns::{DATE_SCAN_ROWS, is_iso_date, parse_iso_date};
use super::segment::marked_bounds;

/// Every parsable ISO date in the first rows of a week, in sheet order.
fn collect_dates(rows: &[Row]) -> Vec<NaiveDate> {
    rows.iter()
        .take(DATE_SCAN_ROWS)
        .flat_map(|row| row.iter())
        .filter_map(|cell| parse_iso_date(&cell.text()))
        .collect()
}

/// Format a date as `MM-DD`.
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// `"MM-DD through MM-DD"` for the earliest and latest dates of the week,
/// or an empty string when fewer than two dates are present.
pub fn extract_date_range(rows: &[Row]) -> String {
    let mut dates = collect_dates(rows);
    if dates.len() < 2 {
        return String::new();
    }
    dates.sort();
    format!(
        "{} through {}",
        format_month_day(dates[0]),
        format_month_day(dates[dates.len() - 1])
    )
}

/// Half-open span `[earliest, latest + 1 day)` covered by the week's dates.
pub fn week_span(rows: &[Row]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let dates = collect_dates(rows);
    let first = dates.iter().min()?;
    let last = dates.iter().max()?;
    let end = last.checked_add_days(Days::new(1))?;
    Some((first.and_hms_opt(0, 0, 0)?, end.and_hms_opt(0, 0, 0)?))
}

fn distance_to_span(now: NaiveDateTime, (start, end): (NaiveDateTime, NaiveDateTime)) -> TimeDelta {
    if now < start {
        start - now
    } else if now >= end {
        now - end
    } else {
        TimeDelta::zero()
    }
}

/// Index of the week whose date span contains `now`.
///
/// When no span contains it, the week with the nearest span wins (ties go to
/// the earlier week). Weeks without any parsable date are ignored; if none has
/// one, returns 0.
pub fn find_current_week(grid: &[Row], separators: &[usize], now: NaiveDateTime) -> usize {
    let mut closest: Option<(usize, TimeDelta)> = None;

    for (index, range) in marked_bounds(separators, grid.len()).into_iter().enumerate() {
        let Some(span) = week_span(&grid[range]) else {
            continue;
        };
        if now >= span.0 && now < span.1 {
            return index;
        }
        let distance = distance_to_span(now, span);
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((index, distance));
        }
    }

    match closest {
        Some((index, _)) => {
            tracing::debug!(week = index, "no week contains today, using closest week");
            index
        }
        None => 0,
    }
}

/// Render ISO midnight timestamps as `MM-DD`; any other text is returned as-is.
pub fn format_display_date(text: &str) -> Cow<'_, str> {
    if !is_iso_date(text) {
        return Cow::Borrowed(text);
    }
    match parse_iso_date(text) {
        Some(date) => Cow::Owned(format_month_day(date)),
        None => Cow::Borrowed(text),
    }
}

/// True if the text is an ISO date falling on `today`.
pub fn is_same_day(text: &str, today: NaiveDate) -> bool {
    parse_iso_date(text) == Some(today)
}
