//! Application state and logic.
//!
//! [`App`] wraps the [`Roster`] document with everything the terminal needs:
//! the background [`Refresher`], the current [`Screen`], scroll position, mouse
//! gesture trackers and the hit areas recorded by the last draw.

use chrono::{Local, NaiveDate, NaiveDateTime};
use ratatui::layout::Rect;
use shiftboard_core::{Refresher, Result as RosterResult, Roster, Sheet};
use shiftboard_engine::engine::{ClickTarget, ClickTracker, CommentAddress, PressTracker};
use std::time::Instant;

use super::keymap::Keymap;

/// Which page is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Legend,
}

/// Something clickable, as laid out by the last draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Cell(CommentAddress),
    Indicator(CommentAddress),
    Tooltip,
    PreviousWeek,
    NextWeek,
    CurrentWeek,
    Legend,
    ClearHighlight,
}

impl HitTarget {
    /// How the comment tooltip sees this click.
    pub fn click_target(self) -> ClickTarget {
        match self {
            HitTarget::Cell(address) => ClickTarget::Cell(address),
            HitTarget::Indicator(address) => ClickTarget::Indicator(address),
            HitTarget::Tooltip => ClickTarget::Tooltip,
            _ => ClickTarget::Elsewhere,
        }
    }
}

/// Fetch status shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing loaded yet.
    Loading,
    Ready,
    /// Last fetch failed; whatever was loaded before stays on screen.
    Failed(String),
}

pub struct App {
    pub roster: Roster,
    pub refresher: Refresher,
    pub keymap: Keymap,
    pub screen: Screen,
    pub load_state: LoadState,
    /// Week to restore when leaving the legend.
    pub legend_return_week: usize,
    /// First visible line of the roster body.
    pub scroll: usize,
    /// Total body lines in the last draw.
    pub body_lines: usize,
    /// Clickable regions from the last draw, topmost last.
    pub hit_areas: Vec<(Rect, HitTarget)>,
    pub press: PressTracker,
    pub clicks: ClickTracker,
    /// Pretend today is this date.
    pub today_override: Option<NaiveDate>,
    pub status_message: String,
}

impl App {
    pub fn new(refresher: Refresher, keymap: Keymap, today_override: Option<NaiveDate>) -> Self {
        Self {
            roster: Roster::new(),
            refresher,
            keymap,
            screen: Screen::Roster,
            load_state: LoadState::Loading,
            legend_return_week: 0,
            scroll: 0,
            body_lines: 0,
            hit_areas: Vec::new(),
            press: PressTracker::default(),
            clicks: ClickTracker::default(),
            today_override,
            status_message: String::new(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        match self.today_override {
            Some(date) => date.and_time(now.time()),
            None => now,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn request_refresh(&mut self) {
        if self.refresher.trigger() {
            self.status_message = "Refreshing...".to_string();
        }
    }

    /// Apply a finished fetch.
    pub fn apply_fetch(&mut self, result: RosterResult<Sheet>) {
        self.status_message.clear();
        match result {
            Ok(sheet) => {
                let now = self.now();
                self.roster.sheet_name = sheet.name;
                self.roster.replace_grid(sheet.grid, now);
                self.load_state = LoadState::Ready;
                self.scroll = 0;
            }
            Err(e) => {
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Periodic work between input events: drain fetches, start scheduled
    /// refreshes, and complete press-and-hold gestures.
    pub fn tick(&mut self, now: Instant) {
        if let Some(result) = self.refresher.poll() {
            self.apply_fetch(result);
        }
        if self.refresher.is_due(now) {
            self.request_refresh();
        }
        if let Some(address) = self.press.held_since(now) {
            self.press.cancel();
            self.roster.select_name(address);
        }
    }

    pub fn show_legend(&mut self) {
        if self.screen == Screen::Legend {
            return;
        }
        self.legend_return_week = self.roster.selected_week();
        self.roster.click_outside(&ClickTarget::Elsewhere);
        self.screen = Screen::Legend;
        self.scroll = 0;
    }

    pub fn close_legend(&mut self) {
        if self.screen != Screen::Legend {
            return;
        }
        self.screen = Screen::Roster;
        self.roster.go_to_week(self.legend_return_week);
        self.scroll = 0;
    }

    pub fn go_to_current_week(&mut self) {
        self.screen = Screen::Roster;
        self.roster.go_to_current_week();
        self.scroll = 0;
    }

    pub fn next_week(&mut self) {
        if self.roster.go_to_next() {
            self.scroll = 0;
        }
    }

    pub fn previous_week(&mut self) {
        if self.roster.go_to_previous() {
            self.scroll = 0;
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.body_lines.saturating_sub(1);
        let next = self.scroll as i64 + delta as i64;
        self.scroll = next.clamp(0, max as i64) as usize;
    }

    /// Esc: close the tooltip first, then the highlight.
    pub fn dismiss(&mut self) {
        if self.roster.interaction().comment.is_shown() {
            self.roster.click_outside(&ClickTarget::Elsewhere);
        } else {
            self.roster.clear_selection();
        }
    }

    /// Topmost hit area under the point.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hit_areas
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x.saturating_add(rect.width)
                    && row >= rect.y
                    && row < rect.y.saturating_add(rect.height)
            })
            .map(|(_, target)| *target)
    }
}
