//! Shift grouping for a single week.
//!
//! A week's rows look roughly like:
//!
//! ```text
//! ACR Operations Shift Schedule
//!        Mon    Tues   Wed   ...        <- days-of-week row (header)
//!        06-03  06-04  06-05 ...        <- header
//!        Meal Periods                   <- anchor, ends the header
//! Owl Shift                             <- label, opens a block
//!        23:00-7:00  Smith  Lee  ...    <- data
//! Day Shift
//!        ...
//! ```
//!
//! The header rows are located first, the remaining rows are classified with
//! [`classify_row`], and a [`BlockAccumulator`] turns the classes into blocks.

use std::sync::Arc;

use super::cell::{Row, row_is_blank};
use super::classify::{RowClass, classify_row, row_shift_type};
use super::patterns::{
    ANCHOR_SCAN_ROWS, DAYS_ROW_SCAN_ROWS, DEFAULT_BLOCK_NAME, MEAL_PERIODS_ANCHOR,
    MIN_WEEKDAY_MATCHES, is_weekday_token,
};

/// A named group of rows for one shift rotation within a week.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftBlock {
    pub shift_name: String,
    /// Shared by every block of the same week.
    pub header_rows: Arc<[Row]>,
    pub content_rows: Vec<Row>,
}

/// Index of the days-of-week row within the first rows of the week.
pub fn find_days_row(rows: &[Row]) -> Option<usize> {
    rows.iter().take(DAYS_ROW_SCAN_ROWS).position(|row| {
        row.iter()
            .filter(|cell| is_weekday_token(&cell.text()))
            .count()
            >= MIN_WEEKDAY_MATCHES
    })
}

/// Index of the "Meal Periods" row, searched from the days row onward.
pub fn find_anchor_row(rows: &[Row], days_row: usize) -> Option<usize> {
    let end = (days_row + ANCHOR_SCAN_ROWS).min(rows.len());
    (days_row..end).find(|&i| {
        rows[i]
            .iter()
            .any(|cell| cell.text() == MEAL_PERIODS_ANCHOR)
    })
}

/// Last header row when no anchor exists: the row after the days row, unless
/// that row already opens a shift block.
fn implicit_header_end(rows: &[Row], days_row: usize) -> usize {
    // Deliberate: a label right after the days row is not pulled into the header.
    match rows.get(days_row + 1) {
        Some(next) if !matches!(classify_row(next), RowClass::Label(_)) => days_row + 1,
        _ => days_row,
    }
}

/// Folds classified rows into blocks.
struct BlockAccumulator {
    header: Arc<[Row]>,
    blocks: Vec<ShiftBlock>,
    open: Option<(String, Vec<Row>)>,
}

impl BlockAccumulator {
    fn new(header: Arc<[Row]>) -> Self {
        Self {
            header,
            blocks: Vec::new(),
            open: None,
        }
    }

    fn push(&mut self, class: RowClass, row: &Row) {
        match class {
            RowClass::Label(name) => {
                self.close();
                tracing::debug!(shift = %name, "opening shift block");
                self.open = Some((name, Vec::new()));
            }
            RowClass::Data => {
                if let Some((_, content)) = self.open.as_mut() {
                    content.push(row.clone());
                }
            }
            RowClass::Blank => {}
        }
    }

    fn close(&mut self) {
        if let Some((name, content)) = self.open.take()
            && !content.is_empty()
        {
            self.blocks.push(ShiftBlock {
                shift_name: name,
                header_rows: Arc::clone(&self.header),
                content_rows: content,
            });
        }
    }

    fn finish(mut self) -> Vec<ShiftBlock> {
        self.close();
        self.blocks
    }
}

fn default_block(header: Arc<[Row]>, rows: &[Row]) -> Option<ShiftBlock> {
    let content: Vec<Row> = rows.iter().filter(|row| !row_is_blank(row)).cloned().collect();
    (!content.is_empty()).then(|| ShiftBlock {
        shift_name: DEFAULT_BLOCK_NAME.to_string(),
        header_rows: header,
        content_rows: content,
    })
}

/// Split a lone block at rows that mention a shift type in any column.
///
/// Rows ahead of the first shift-type row stay together under the original
/// block name. With no shift-type row the block is returned unchanged.
fn resplit_by_shift_type(block: ShiftBlock) -> Vec<ShiftBlock> {
    let boundaries: Vec<usize> = block
        .content_rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_shift_type(row).is_some())
        .map(|(i, _)| i)
        .collect();

    if boundaries.is_empty() {
        return vec![block];
    }

    let ShiftBlock {
        shift_name,
        header_rows,
        content_rows,
    } = block;

    let mut blocks = Vec::with_capacity(boundaries.len() + 1);
    // Deliberate: leading rows are kept under the old name instead of dropped.
    if boundaries[0] > 0 {
        blocks.push(ShiftBlock {
            shift_name,
            header_rows: Arc::clone(&header_rows),
            content_rows: content_rows[..boundaries[0]].to_vec(),
        });
    }

    for (i, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(i + 1).copied().unwrap_or(content_rows.len());
        let segment = &content_rows[start..end];
        let name = segment
            .first()
            .and_then(|row| row_shift_type(row))
            .unwrap_or(DEFAULT_BLOCK_NAME);
        blocks.push(ShiftBlock {
            shift_name: name.to_string(),
            header_rows: Arc::clone(&header_rows),
            content_rows: segment.to_vec(),
        });
    }
    blocks
}

/// Partition one week's rows into named shift blocks.
pub fn group_by_shift(rows: &[Row]) -> Vec<ShiftBlock> {
    if rows.is_empty() {
        return Vec::new();
    }

    let Some(days_row) = find_days_row(rows) else {
        tracing::debug!("no days-of-week row, using a single schedule block");
        return default_block(Arc::from(Vec::new()), rows).into_iter().collect();
    };

    let header_end = find_anchor_row(rows, days_row)
        .unwrap_or_else(|| implicit_header_end(rows, days_row))
        .min(rows.len() - 1);
    let header: Arc<[Row]> = Arc::from(rows[days_row..=header_end].to_vec());
    let body = &rows[header_end + 1..];

    let mut acc = BlockAccumulator::new(Arc::clone(&header));
    for row in body {
        acc.push(classify_row(row), row);
    }
    let mut blocks = acc.finish();

    if blocks.is_empty() {
        tracing::debug!("no labeled shift blocks, using a single schedule block");
        blocks.extend(default_block(header, body));
    }

    if blocks.len() == 1 {
        if let Some(block) = blocks.pop() {
            blocks = resplit_by_shift_type(block);
        }
    }
    blocks
}
