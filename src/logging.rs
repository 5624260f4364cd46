//! Log setup. Filter with `SHIFTBOARD_LOG`, e.g. `SHIFTBOARD_LOG=shiftboard_core=debug`.

use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHIFTBOARD_LOG";

/// Where log lines go.
pub enum LogTarget {
    /// The terminal is free; log warnings to stderr.
    Stderr,
    /// The TUI owns the terminal; append to a file in the data dir.
    File,
}

pub fn init_logging(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let filter = env_filter("warn");
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let filter = env_filter("info");
            match open_log_file() {
                Some(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                None => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_writer(std::io::sink)
                        .try_init();
                }
            }
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn log_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "shiftboard")?;
    let mut path = proj.data_dir().to_path_buf();
    path.push("shiftboard.log");
    Some(path)
}

fn open_log_file() -> Option<std::fs::File> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
