//! Markdown rendering of a single week

use crate::document::{DISPLAY_COLUMNS, WeekView, display_text};
use chrono::NaiveDate;
use shiftboard_engine::engine::{Cell, CommentAddress, Row, RowKind, is_same_day};
use std::io::Write;

/// Write the selected week as markdown: one table per shift block, followed
/// by the comments attached to its cells.
pub fn write_week_markdown<W: Write>(
    w: &mut W,
    view: &WeekView<'_>,
    today: NaiveDate,
) -> std::io::Result<()> {
    writeln!(w, "# {}", view.week_header)?;
    writeln!(w)?;
    if !view.date_range_label.is_empty() {
        writeln!(w, "*{}*", view.date_range_label)?;
        writeln!(w)?;
    }
    writeln!(w, "Week {} of {}", view.selected_week + 1, view.total_weeks)?;

    if view.shift_blocks.is_empty() {
        writeln!(w)?;
        writeln!(w, "*No shifts scheduled*")?;
        return Ok(());
    }

    for (b, block) in view.shift_blocks.iter().enumerate() {
        writeln!(w)?;
        writeln!(w, "## {}", block.shift_name)?;
        writeln!(w)?;

        let mut comments: Vec<(CommentAddress, &Cell)> = Vec::new();
        let mut rows = block
            .header_rows
            .iter()
            .enumerate()
            .map(|(r, row)| (CommentAddress::header(b, r, 0), row))
            .chain(
                block
                    .content_rows
                    .iter()
                    .enumerate()
                    .map(|(r, row)| (CommentAddress::content(b, r, 0), row)),
            );

        // Markdown tables need a header line; a block without header rows
        // gets an empty one.
        if block.header_rows.is_empty() {
            write_empty_header(w)?;
        } else if let Some((address, row)) = rows.next() {
            write_row(w, view, row, address, today, &mut comments)?;
            write_separator(w)?;
        }
        for (address, row) in rows {
            write_row(w, view, row, address, today, &mut comments)?;
        }

        if !comments.is_empty() {
            writeln!(w)?;
            for (address, cell) in comments {
                writeln!(
                    w,
                    "- {} {}: {}",
                    address,
                    escape_markdown(&cell.text()),
                    escape_markdown(cell.comment().unwrap_or_default())
                )?;
            }
        }
    }

    Ok(())
}

fn write_empty_header<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "|")?;
    for _ in DISPLAY_COLUMNS {
        write!(w, "   |")?;
    }
    writeln!(w)?;
    write_separator(w)
}

fn write_separator<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "|")?;
    for _ in DISPLAY_COLUMNS {
        write!(w, "---|")?;
    }
    writeln!(w)
}

fn write_row<'a, W: Write>(
    w: &mut W,
    view: &WeekView<'_>,
    row: &'a Row,
    address: CommentAddress,
    today: NaiveDate,
    comments: &mut Vec<(CommentAddress, &'a Cell)>,
) -> std::io::Result<()> {
    write!(w, "|")?;
    for col in DISPLAY_COLUMNS {
        let Some(cell) = row.get(col) else {
            write!(w, "   |")?;
            continue;
        };
        if cell.comment().is_some() {
            comments.push((CommentAddress { cell: col, ..address }, cell));
        }
        write!(w, " {} |", render_cell(view, cell, address.kind, today))?;
    }
    writeln!(w)
}

fn render_cell(view: &WeekView<'_>, cell: &Cell, kind: RowKind, today: NaiveDate) -> String {
    let text = escape_markdown(&display_text(cell, kind));
    if text.trim().is_empty() {
        return text;
    }
    let mut out = text;
    if cell.strike {
        out = format!("~~{}~~", out);
    }
    let is_today = kind == RowKind::Header && is_same_day(&cell.text(), today);
    if is_today || view.interaction.highlight.matches(&cell.text()) {
        out = format!("**{}**", out);
    }
    if cell.comment().is_some() {
        out.push('*');
    }
    out
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::write_week_markdown;
    use crate::Roster;
    use chrono::NaiveDate;
    use shiftboard_engine::engine::{Cell, CommentAddress, Row};

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|s| Cell::new_text(s)).collect()
    }

    fn render(roster: &Roster, today: NaiveDate) -> String {
        let mut out = Vec::new();
        write_week_markdown(&mut out, &roster.week_view(), today).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_week_markdown() {
        let grid = vec![
            text_row(&["", "ACR Operations Shift Schedule"]),
            text_row(&["", "Mon", "Tues", "Wed"]),
            text_row(&["", "2024-06-03T00:00:00", "2024-06-04T00:00:00", "2024-06-05T00:00:00"]),
            text_row(&["Owl Shift"]),
            vec![
                Cell::new_empty(),
                Cell::new_text("23:00 - 7:00"),
                Cell::new_text("Smith").with_strike(true),
                Cell::new_text("Lee|Kim").with_comment("split\nshift"),
            ],
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let mut roster = Roster::from_grid(grid, today.and_hms_opt(8, 0, 0).unwrap());
        roster.select_name(CommentAddress::content(0, 0, 2));

        let expected = "\
# ACR Operations Shift Schedule

*06-03 through 06-05*

Week 1 of 1

## Owl Shift

| Mon | Tues | Wed |   |   |   |   |   |
|---|---|---|---|---|---|---|---|
| 06-03 | **06-04** | 06-05 |   |   |   |   |   |
| 23:00 - 7:00 | **~~Smith~~** | Lee\\|Kim* |   |   |   |   |   |

- #1 D1 Lee\\|Kim: split shift
";
        assert_eq!(render(&roster, today), expected);
    }

    #[test]
    fn test_empty_week_markdown() {
        let roster = Roster::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let text = render(&roster, today);
        assert!(text.starts_with("# Weekly Operations Shift Schedule\n"));
        assert!(text.ends_with("*No shifts scheduled*\n"));
    }
}
