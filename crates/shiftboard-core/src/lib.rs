//! shiftboard-core - UI-agnostic roster document, schedule sources and rendering.

pub mod document;
pub mod error;
pub mod source;
pub mod storage;

pub use document::{Roster, WeekView};
pub use error::{RosterError, Result};
pub use source::{DEFAULT_TIMEOUT, FileSource, HttpSource, Refresher, ScheduleSource, open_source};
pub use storage::{Sheet, parse_schedule, write_week_markdown};
