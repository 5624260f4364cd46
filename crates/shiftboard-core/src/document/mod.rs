//! Roster state and logic (UI-agnostic).

mod nav;
mod state;
mod view;

pub use state::Roster;
pub use view::{DISPLAY_COLUMNS, WeekView, display_text, is_divider_row};
