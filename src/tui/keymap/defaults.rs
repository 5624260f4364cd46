use crate::tui::app::Screen;
use crate::tui::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn translate_common(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::PageUp => Some(Action::Scroll(-10)),
        KeyCode::PageDown => Some(Action::Scroll(10)),
        _ => None,
    }
}

pub(crate) fn translate_vim(screen: Screen, key: KeyEvent) -> Option<Action> {
    if let Some(action) = translate_common(key) {
        return Some(action);
    }
    match screen {
        Screen::Roster => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousWeek),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextWeek),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
            KeyCode::Char('t') | KeyCode::Char('.') => Some(Action::CurrentWeek),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('?') => Some(Action::ShowLegend),
            KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Legend => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('?') => Some(Action::Back),
            KeyCode::Char('t') | KeyCode::Char('.') => Some(Action::CurrentWeek),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

pub(crate) fn translate_arrows(screen: Screen, key: KeyEvent) -> Option<Action> {
    if let Some(action) = translate_common(key) {
        return Some(action);
    }
    match screen {
        Screen::Roster => match key.code {
            KeyCode::Left => Some(Action::PreviousWeek),
            KeyCode::Right => Some(Action::NextWeek),
            KeyCode::Up => Some(Action::Scroll(-1)),
            KeyCode::Down => Some(Action::Scroll(1)),
            KeyCode::Home => Some(Action::CurrentWeek),
            KeyCode::F(5) => Some(Action::Refresh),
            KeyCode::F(1) => Some(Action::ShowLegend),
            KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Legend => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::F(1) => Some(Action::Back),
            KeyCode::Home => Some(Action::CurrentWeek),
            KeyCode::Up => Some(Action::Scroll(-1)),
            KeyCode::Down => Some(Action::Scroll(1)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}
