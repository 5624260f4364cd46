//! Error types for Shiftboard core.

use thiserror::Error;

/// Errors surfaced while loading a schedule.
///
/// Problems with individual cells never show up here: malformed cells, missing
/// week markers and missing shift labels all degrade to defaults instead.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Request timed out. Please check your connection and try again.")]
    FetchTimeout,

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("No sheets found in the schedule data")]
    NoSheetsFound,

    #[error("Malformed schedule payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
