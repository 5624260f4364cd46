use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};

use super::actions::{ApplyResult, apply_action};
use super::app::{App, HitTarget, Screen};
use super::keymap::translate;
use super::ui;
use shiftboard_engine::engine::ClickTarget;

/// How long to wait for input before running periodic work.
const TICK: Duration = Duration::from_millis(100);

/// Lines moved per mouse wheel step.
const WHEEL_LINES: i32 = 3;

fn handle_click(app: &mut App, target: Option<HitTarget>, now: Instant) {
    if app.screen == Screen::Legend {
        match target {
            Some(HitTarget::Legend) => app.close_legend(),
            Some(HitTarget::CurrentWeek) => app.go_to_current_week(),
            _ => {}
        }
        return;
    }

    let click_target = target.map_or(ClickTarget::Elsewhere, HitTarget::click_target);
    app.roster.click_outside(&click_target);

    match target {
        Some(HitTarget::Cell(address)) => {
            if app.clicks.click(address, now) {
                app.roster.select_name(address);
            } else {
                app.roster.toggle_comment(address);
                app.press.press(address, now);
            }
        }
        Some(HitTarget::Indicator(address)) => app.roster.toggle_comment(address),
        Some(HitTarget::Tooltip) | None => {}
        Some(HitTarget::PreviousWeek) => app.previous_week(),
        Some(HitTarget::NextWeek) => app.next_week(),
        Some(HitTarget::CurrentWeek) => app.go_to_current_week(),
        Some(HitTarget::Legend) => app.show_legend(),
        Some(HitTarget::ClearHighlight) => app.roster.clear_selection(),
    }
}

pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    let target = app.target_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, target, now),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(HitTarget::Cell(address)) = target
                && app.press.release(address, now)
            {
                app.roster.select_name(address);
            }
            app.press.cancel();
        }
        MouseEventKind::Drag(_) => app.press.cancel(),
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_LINES),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_LINES),
        MouseEventKind::ScrollLeft if app.screen == Screen::Roster => app.previous_week(),
        MouseEventKind::ScrollRight if app.screen == Screen::Roster => app.next_week(),
        _ => {}
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(TICK)? {
            app.tick(Instant::now());
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = translate(app.keymap, app.screen, key)
                    && apply_action(app, action) == ApplyResult::Quit
                {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, Instant::now()),
            _ => {}
        }
        app.tick(Instant::now());
    }
}
