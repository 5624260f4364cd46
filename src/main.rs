//! Shiftboard - a terminal viewer for weekly operations shift rosters.

mod config;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::Parser;
use shiftboard_core::{Refresher, Roster, open_source, write_week_markdown};
use std::io::Write;
use std::path::PathBuf;

use config::{Overrides, Settings, load_config};
use logging::{LogTarget, init_logging};

#[derive(Parser, Debug)]
#[command(name = "shiftboard", version, about = "View a weekly shift roster in the terminal")]
struct Cli {
    /// Schedule JSON: an http(s) URL or a file path
    source: Option<String>,

    /// Read settings from this file instead of the user config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minutes between automatic refreshes (0 disables)
    #[arg(long, value_name = "MINUTES")]
    refresh: Option<u64>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print one week as markdown and exit
    #[arg(long)]
    print: bool,

    /// Week to print, counting from 1 (default: the current week)
    #[arg(long, value_name = "N", requires = "print")]
    week: Option<usize>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Key bindings: vim or arrows
    #[arg(long, value_name = "NAME")]
    keymap: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (file, warnings) = load_config(cli.config.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    let settings = Settings::resolve(
        Overrides {
            source: cli.source.clone(),
            refresh_minutes: cli.refresh,
            timeout_secs: cli.timeout,
            keymap: cli.keymap.clone(),
        },
        file,
    );

    let location = settings.source.as_deref().ok_or_else(|| {
        anyhow!("no schedule source: pass a URL or path, or set `source` in config.toml")
    })?;

    if cli.print {
        init_logging(LogTarget::Stderr);
        let source = open_source(location, settings.timeout)?;
        let refresher = Refresher::new(source, None);
        return print_week(&refresher, cli.week, cli.today);
    }

    init_logging(LogTarget::File);
    let source = open_source(location, settings.timeout)?;
    let refresher = Refresher::new(source, settings.refresh);
    run_interactive(refresher, &settings, cli.today)
}

fn print_week(refresher: &Refresher, week: Option<usize>, today: Option<NaiveDate>) -> Result<()> {
    let sheet = refresher
        .fetch_blocking()
        .with_context(|| format!("loading {}", refresher.describe()))?;

    let now = Local::now().naive_local();
    let now = today.map_or(now, |date| date.and_time(now.time()));
    let mut roster = Roster::from_grid(sheet.grid, now);
    roster.sheet_name = sheet.name;

    if let Some(n) = week {
        if (1..=roster.total_weeks()).contains(&n) {
            roster.go_to_week(n - 1);
        } else {
            eprintln!(
                "Warning: week {} out of range (1-{}), showing the current week",
                n,
                roster.total_weeks()
            );
        }
    }

    let mut out = std::io::stdout().lock();
    write_week_markdown(&mut out, &roster.week_view(), now.date())?;
    out.flush()?;
    Ok(())
}

#[cfg(feature = "tui")]
fn run_interactive(
    refresher: Refresher,
    settings: &Settings,
    today: Option<NaiveDate>,
) -> Result<()> {
    let (keymap, warning) = tui::Keymap::from_name(settings.keymap.as_deref());
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }
    if let Some(path) = logging::log_file_path() {
        tracing::info!(log = %path.display(), source = %refresher.describe(), "starting");
    }

    let mut app = tui::App::new(refresher, keymap, today);
    tui::run(&mut app).context("terminal error")
}

#[cfg(not(feature = "tui"))]
fn run_interactive(
    _refresher: Refresher,
    _settings: &Settings,
    _today: Option<NaiveDate>,
) -> Result<()> {
    Err(anyhow!(
        "built without the `tui` feature; use --print to render a week"
    ))
}
