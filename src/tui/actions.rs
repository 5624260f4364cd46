use super::app::{App, Screen};
use super::keymap::Action;

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::NextWeek => app.next_week(),
        Action::PreviousWeek => app.previous_week(),
        Action::CurrentWeek => app.go_to_current_week(),
        Action::Scroll(delta) => app.scroll_by(delta),
        Action::Refresh => app.request_refresh(),
        Action::ShowLegend => app.show_legend(),
        Action::Back => app.close_legend(),
        Action::Dismiss => {
            if app.screen == Screen::Roster {
                app.dismiss();
            }
        }
        Action::Quit => return ApplyResult::Quit,
    }
    ApplyResult::Continue
}
