//! Text content for the legend screen

use super::keymap::Keymap;

/// What the colours and markers on the roster mean.
pub fn get_indicators_text() -> Vec<String> {
    vec![
        "Cell Indicators",
        "  Name•        Additional notes. Click the dot or the name to read them",
        "  Struck name  Absent: vacation, PTO, sick leave or other leave",
        "  Yellow date  Today's column",
        "",
        "Name Highlighting",
        "  Double-click or press and hold a staff member's name to highlight",
        "  every occurrence. Do it again, or press Esc, to clear.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Key bindings for the current keymap.
pub fn get_navigation_text(keymap: Keymap) -> Vec<String> {
    let lines = match keymap {
        Keymap::Vim => vec![
            "Week Navigation",
            "  h / l        Previous / next week",
            "  t or .       Go to current week",
            "  j / k        Scroll",
            "  r            Refresh now",
            "  ?            Show this legend",
            "  Esc          Close note, then clear highlight",
            "  q            Quit",
        ],
        Keymap::Arrows => vec![
            "Week Navigation",
            "  Left/Right   Previous / next week",
            "  Home         Go to current week",
            "  Up/Down      Scroll",
            "  F5           Refresh now",
            "  F1           Show this legend",
            "  Esc          Close note, then clear highlight",
            "  q            Quit",
        ],
    };
    let mut lines: Vec<String> = lines.into_iter().map(str::to_string).collect();
    lines.push("  Scroll sideways with the mouse to change week.".to_string());
    lines
}

/// Where the data comes from and how often it updates.
pub fn get_source_text(source: &str, refresh_minutes: Option<u64>) -> Vec<String> {
    let mut lines = vec![
        "Data Source".to_string(),
        format!("  {}", source),
    ];
    match refresh_minutes {
        Some(minutes) => lines.push(format!(
            "  Refreshed automatically every {} minutes.",
            minutes
        )),
        None => lines.push("  Automatic refresh is off.".to_string()),
    }
    lines.push("  Need a change? Contact your supervisor to update the master schedule.".to_string());
    lines
}
