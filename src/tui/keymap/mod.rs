//! Keymap translation layer.
//!
//! This keeps key handling separate from app behavior.

mod defaults;
mod types;

pub use types::{Action, Keymap};

use crate::tui::app::Screen;
use crossterm::event::KeyEvent;

/// Translate a key event to an action based on the current keymap and screen.
///
/// Returns `None` if the key has no binding on the current screen.
pub fn translate(keymap: Keymap, screen: Screen, key: KeyEvent) -> Option<Action> {
    match keymap {
        Keymap::Vim => defaults::translate_vim(screen, key),
        Keymap::Arrows => defaults::translate_arrows(screen, key),
    }
}
