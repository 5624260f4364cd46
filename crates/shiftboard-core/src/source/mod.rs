//! Where schedule payloads come from.

mod refresh;

pub use refresh::Refresher;

use crate::error::{Result, RosterError};
use std::path::PathBuf;
use std::time::Duration;

/// Default bound on a single HTTP fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A place a schedule payload can be read from.
pub trait ScheduleSource: Send + Sync {
    /// Human readable location, for the status bar and logs.
    fn describe(&self) -> String;

    /// Fetch the raw JSON payload.
    fn fetch(&self) -> Result<String>;
}

/// A schedule export on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// A schedule API endpoint.
pub struct HttpSource {
    url: String,
    http: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("shiftboard/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::FetchFailed(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            url: url.to_string(),
            http,
        })
    }
}

impl ScheduleSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::FetchFailed(format!(
                "Server error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )));
        }
        response.text().map_err(request_error)
    }
}

fn request_error(e: reqwest::Error) -> RosterError {
    if e.is_timeout() {
        RosterError::FetchTimeout
    } else {
        RosterError::FetchFailed(e.to_string())
    }
}

/// Pick a source for `location`: `http://` and `https://` URLs are fetched over
/// HTTP, anything else is read as a file path.
pub fn open_source(location: &str, timeout: Duration) -> Result<Box<dyn ScheduleSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
