use super::ScheduleSource;
use crate::error::Result;
use crate::storage::{Sheet, parse_schedule};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

/// Runs fetches on a background thread, one at a time.
///
/// The UI calls [`Refresher::trigger`] on user request or when
/// [`Refresher::is_due`], and drains finished fetches with
/// [`Refresher::poll`] from its event loop.
pub struct Refresher {
    source: Arc<dyn ScheduleSource>,
    interval: Option<Duration>,
    tx: Sender<Result<Sheet>>,
    rx: Receiver<Result<Sheet>>,
    in_flight: bool,
    last_started: Option<Instant>,
}

impl Refresher {
    /// `interval` of `None` disables periodic refresh.
    pub fn new(source: Box<dyn ScheduleSource>, interval: Option<Duration>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source: Arc::from(source),
            interval,
            tx,
            rx,
            in_flight: false,
            last_started: None,
        }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a fetch. Ignored while another one is still running.
    ///
    /// Returns true if a fetch was started.
    pub fn trigger(&mut self) -> bool {
        if self.in_flight {
            tracing::debug!("refresh already in flight, ignoring trigger");
            return false;
        }
        self.in_flight = true;
        self.last_started = Some(Instant::now());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let result = fetch_sheet(source.as_ref());
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(result);
        });
        true
    }

    /// A finished fetch, if one has arrived.
    pub fn poll(&mut self) -> Option<Result<Sheet>> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.in_flight = false;
                Some(result)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// True when the periodic interval has elapsed since the last fetch.
    pub fn is_due(&self, now: Instant) -> bool {
        match (self.interval, self.last_started) {
            (Some(interval), Some(started)) => {
                !self.in_flight && now.duration_since(started) >= interval
            }
            (Some(_), None) => !self.in_flight,
            (None, _) => false,
        }
    }

    /// Fetch on the calling thread.
    pub fn fetch_blocking(&self) -> Result<Sheet> {
        fetch_sheet(self.source.as_ref())
    }
}

fn fetch_sheet(source: &dyn ScheduleSource) -> Result<Sheet> {
    let location = source.describe();
    tracing::info!(source = %location, "fetching schedule");
    let result = source.fetch().and_then(|json| parse_schedule(&json));
    match &result {
        Ok(sheet) => tracing::info!(rows = sheet.grid.len(), "schedule loaded"),
        Err(e) => tracing::warn!(source = %location, error = %e, "schedule fetch failed"),
    }
    result
}
