//! UI rendering
//!
//! Every draw also records the clickable regions into [`App::hit_areas`], so
//! mouse handling hit-tests exactly what is on screen.

use super::app::{App, HitTarget, LoadState, Screen};
use super::legend::{get_indicators_text, get_navigation_text, get_source_text};
use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use shiftboard_core::document::{DISPLAY_COLUMNS, display_text, is_divider_row};
use shiftboard_engine::engine::{Cell, CommentAddress, InteractionState, Row, RowKind, is_same_day};

pub(crate) const TITLE_BAR_HEIGHT: u16 = 3;
pub(crate) const BODY_MIN_HEIGHT: u16 = 5;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
const TOOLTIP_MAX_WIDTH: u16 = 40;
const COMMENT_MARKER: &str = "•";

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// One line of the roster body.
enum BodyLine<'a> {
    Title(&'a str),
    Cells {
        block: usize,
        kind: RowKind,
        row: usize,
        cells: &'a Row,
    },
    Divider,
    Blank,
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hit_areas.clear();
    let [title_area, body_area, status_area] = split_main_chunks(f.area());

    draw_title_bar(f, app, title_area);
    match app.screen {
        Screen::Roster => draw_roster(f, app, body_area),
        Screen::Legend => draw_legend(f, app, body_area),
    }
    draw_status_bar(f, app, status_area);
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let view = app.roster.week_view();
    let line = match app.screen {
        Screen::Legend => Line::from(Span::styled(
            "Schedule Guide",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Screen::Roster => {
            let mut spans = vec![Span::styled(
                view.week_header.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if !view.date_range_label.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    view.date_range_label.to_string(),
                    Style::default().fg(Color::Cyan),
                ));
            }
            if !view.is_current_week() {
                spans.push(Span::styled(
                    "  (not this week)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Shiftboard ")
        .border_style(Style::default().fg(Color::White));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn body_lines<'a>(app: &'a App) -> Vec<BodyLine<'a>> {
    let mut lines = Vec::new();
    for (b, block) in app.roster.shift_blocks().iter().enumerate() {
        if b > 0 {
            lines.push(BodyLine::Blank);
        }
        lines.push(BodyLine::Title(&block.shift_name));
        for (r, cells) in block.header_rows.iter().enumerate() {
            lines.push(BodyLine::Cells {
                block: b,
                kind: RowKind::Header,
                row: r,
                cells,
            });
        }
        for (r, cells) in block.content_rows.iter().enumerate() {
            if r > 0 && is_divider_row(cells) {
                lines.push(BodyLine::Divider);
            }
            lines.push(BodyLine::Cells {
                block: b,
                kind: RowKind::Content,
                row: r,
                cells,
            });
        }
    }
    lines
}

fn draw_roster(f: &mut Frame, app: &mut App, area: Rect) {
    let outer = Block::default().borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let placeholder = match (&app.load_state, app.roster.last_refresh) {
        (LoadState::Loading, None) => Some(("Loading schedule...", Color::Yellow)),
        (LoadState::Failed(_), None) => Some(("Unable to load the schedule.", Color::Red)),
        _ if app.roster.shift_blocks().is_empty() => {
            Some(("No shifts scheduled for this week.", Color::DarkGray))
        }
        _ => None,
    };
    if let Some((message, color)) = placeholder {
        app.body_lines = 0;
        app.scroll = 0;
        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(color)),
            inner,
        );
        return;
    }

    let today = app.today();
    let mut hits = Vec::new();
    let mut tooltip_anchor = None;
    let (total, scroll) = {
        let lines = body_lines(app);
        let total = lines.len();
        let scroll = app.scroll.min(total.saturating_sub(1));
        let col_width = (inner.width / DISPLAY_COLUMNS.count() as u16).max(1);
        let interaction = app.roster.interaction();

        for (i, line) in lines.iter().skip(scroll).take(inner.height as usize).enumerate() {
            let y = inner.y + i as u16;
            let line_area = Rect::new(inner.x, y, inner.width, 1);
            match line {
                BodyLine::Title(name) => f.render_widget(
                    Paragraph::new(*name).style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    line_area,
                ),
                BodyLine::Divider => f.render_widget(
                    Paragraph::new("─".repeat(inner.width as usize))
                        .style(Style::default().fg(Color::DarkGray)),
                    line_area,
                ),
                BodyLine::Blank => {}
                BodyLine::Cells {
                    block,
                    kind,
                    row,
                    cells,
                } => {
                    for (slot, col) in DISPLAY_COLUMNS.enumerate() {
                        let x = inner.x + slot as u16 * col_width;
                        if x >= inner.x + inner.width {
                            break;
                        }
                        let width = col_width.min(inner.x + inner.width - x);
                        let rect = Rect::new(x, y, width, 1);
                        let Some(cell) = cells.get(col) else {
                            continue;
                        };
                        let address = CommentAddress::new(*block, *kind, *row, col);
                        let text = display_text(cell, *kind);
                        let style = cell_style(interaction, address, cell, *kind, today);
                        f.render_widget(Paragraph::new(text).style(style), rect);
                        hits.push((rect, HitTarget::Cell(address)));

                        if cell.comment().is_some() && width > 1 {
                            let marker = Rect::new(x + width - 2, y, 1, 1);
                            f.render_widget(
                                Paragraph::new(COMMENT_MARKER)
                                    .style(Style::default().fg(Color::Blue)),
                                marker,
                            );
                            hits.push((marker, HitTarget::Indicator(address)));
                        }
                        if interaction.comment.shown_at() == Some(address) {
                            tooltip_anchor = Some(rect);
                        }
                    }
                }
            }
        }
        (total, scroll)
    };
    app.body_lines = total;
    app.scroll = scroll;
    app.hit_areas.extend(hits);

    if let (Some(anchor), Some(text)) = (tooltip_anchor, app.roster.interaction().comment.text()) {
        let text = text.to_string();
        draw_tooltip(f, app, anchor, area, &text);
    }
}

fn cell_style(
    interaction: &InteractionState,
    address: CommentAddress,
    cell: &Cell,
    kind: RowKind,
    today: NaiveDate,
) -> Style {
    let text = cell.text();
    let mut style = match kind {
        RowKind::Header => Style::default().fg(Color::Cyan),
        RowKind::Content => Style::default(),
    };
    if kind == RowKind::Header && is_same_day(&text, today) {
        style = style
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    if interaction.highlight.matches(&text) {
        style = style
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
    }
    if cell.strike {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if interaction.comment.shown_at() == Some(address) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Place the note below its cell, or above it when there is no room.
fn draw_tooltip(f: &mut Frame, app: &mut App, anchor: Rect, bounds: Rect, text: &str) {
    let width = TOOLTIP_MAX_WIDTH.min(bounds.width);
    if width < 4 {
        return;
    }
    let text_width = (width - 2) as usize;
    let wrapped_lines = text
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(text_width))
        .sum::<usize>()
        .max(1);
    let height = (wrapped_lines as u16 + 2).min(bounds.height);

    let x = anchor.x.min(bounds.x + bounds.width - width);
    let below = anchor.y + 1;
    let y = if below + height <= bounds.y + bounds.height {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let area = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Note ")
        .border_style(Style::default().fg(Color::Blue))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text.to_string())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
    app.hit_areas.push((area, HitTarget::Tooltip));
}

fn draw_legend(f: &mut Frame, app: &mut App, area: Rect) {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::White);

    let refresh_minutes = app.refresher.interval().map(|d| d.as_secs() / 60);
    let sections = [
        get_indicators_text(),
        get_navigation_text(app.keymap),
        get_source_text(&app.refresher.describe(), refresh_minutes),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for text in section {
            let style = if text.starts_with("  ") || text.is_empty() {
                body
            } else {
                heading
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    app.body_lines = lines.len();
    app.scroll = app.scroll.min(lines.len().saturating_sub(1));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Legend ")
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll as u16, 0));
    f.render_widget(paragraph, area);
}

/// Builds the status line left to right, recording clickable spans.
struct StatusLine {
    x: u16,
    end: u16,
    y: u16,
    spans: Vec<Span<'static>>,
    hits: Vec<(Rect, HitTarget)>,
}

impl StatusLine {
    fn new(area: Rect) -> Self {
        Self {
            x: area.x,
            end: area.x + area.width,
            y: area.y,
            spans: Vec::new(),
            hits: Vec::new(),
        }
    }

    fn push(&mut self, text: String, style: Style, target: Option<HitTarget>) {
        let width = text.chars().count() as u16;
        if let Some(target) = target
            && self.x < self.end
        {
            let width = width.min(self.end - self.x);
            self.hits.push((Rect::new(self.x, self.y, width, 1), target));
        }
        self.x = self.x.saturating_add(width);
        self.spans.push(Span::styled(text, style));
    }
}

fn draw_status_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let button = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let mut status = StatusLine::new(area);

    match app.screen {
        Screen::Roster => {
            let view = app.roster.week_view();
            status.push("‹".to_string(), button, Some(HitTarget::PreviousWeek));
            status.push(
                format!(" {} of {} ", view.selected_week + 1, view.total_weeks),
                Style::default(),
                None,
            );
            status.push("›".to_string(), button, Some(HitTarget::NextWeek));
            status.push("  ".to_string(), dim, None);
            status.push("[Today]".to_string(), button, Some(HitTarget::CurrentWeek));
            status.push(" ".to_string(), dim, None);
            status.push("[Legend]".to_string(), button, Some(HitTarget::Legend));
            if let Some(name) = view.interaction.highlight.selected() {
                status.push(
                    format!("  Highlight: {} ", name),
                    Style::default().fg(Color::Magenta),
                    None,
                );
                status.push("[x]".to_string(), button, Some(HitTarget::ClearHighlight));
            }
        }
        Screen::Legend => {
            status.push("[Back]".to_string(), button, Some(HitTarget::Legend));
            status.push(" ".to_string(), dim, None);
            status.push(
                "[Current week]".to_string(),
                button,
                Some(HitTarget::CurrentWeek),
            );
        }
    }
    status.push("  ".to_string(), dim, None);

    if !app.status_message.is_empty() {
        status.push(
            app.status_message.clone(),
            Style::default().fg(Color::Yellow),
            None,
        );
    } else if let LoadState::Failed(message) = &app.load_state {
        status.push(
            format!("Error: {}", message),
            Style::default().fg(Color::Red),
            None,
        );
    } else {
        if let Some(at) = app.roster.last_refresh {
            status.push(format!("Updated {}  ", at.format("%H:%M")), dim, None);
        }
        status.push(
            format!("[{}] {}", app.keymap.name(), app.keymap.status_hint()),
            dim,
            None,
        );
    }

    app.hit_areas.extend(status.hits);
    f.render_widget(Paragraph::new(Line::from(status.spans)), area);
}
