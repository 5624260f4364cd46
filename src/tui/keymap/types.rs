/// Available keybinding schemes.
///
/// - [`Vim`](Keymap::Vim): `h`/`l` between weeks, `j`/`k` to scroll
/// - [`Arrows`](Keymap::Arrows): arrow keys and function keys only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Keymap {
    #[default]
    Vim,
    Arrows,
}

impl Keymap {
    /// Look up a keymap by name. Unknown names fall back to vim with a warning.
    pub fn from_name(name: Option<&str>) -> (Keymap, Option<String>) {
        let Some(name) = name.map(str::trim).filter(|s| !s.is_empty()) else {
            return (Keymap::Vim, None);
        };
        if name.eq_ignore_ascii_case("vim") {
            (Keymap::Vim, None)
        } else if name.eq_ignore_ascii_case("arrows") {
            (Keymap::Arrows, None)
        } else {
            (
                Keymap::Vim,
                Some(format!("Unknown keymap '{}', using built-in 'vim'", name)),
            )
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Keymap::Vim => "vim",
            Keymap::Arrows => "arrows",
        }
    }

    pub fn status_hint(&self) -> &'static str {
        match self {
            Keymap::Vim => "h/l:week  t:today  j/k:scroll  r:refresh  ?:legend  q:quit",
            Keymap::Arrows => "←/→:week  Home:today  ↑/↓:scroll  F5:refresh  F1:legend  q:quit",
        }
    }
}

/// Actions that can be triggered by key presses.
///
/// The keymap translates key events into actions, which are then applied to
/// the application state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    NextWeek,
    PreviousWeek,
    /// Jump to the week containing today.
    CurrentWeek,
    /// Scroll the roster by this many lines.
    Scroll(i32),
    /// Fetch the schedule now.
    Refresh,
    ShowLegend,
    /// Leave the legend, restoring the week shown before it.
    Back,
    /// Close the comment tooltip, or clear the highlighted name.
    Dismiss,
    Quit,
}
