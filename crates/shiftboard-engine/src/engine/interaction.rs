//! Interaction state for a rendered week.
//!
//! Two independent machines:
//! - [`CommentState`] - which cell's comment tooltip is open, if any
//! - [`NameHighlight`] - which staff name is highlighted across the roster
//!
//! Both are plain values driven by UI events. Navigation resets the comment
//! tooltip but keeps the highlighted name.

use std::fmt;
use std::time::{Duration, Instant};

/// Minimum press duration that activates a name highlight.
pub const LONG_PRESS: Duration = Duration::from_millis(600);

/// Maximum gap between two clicks on the same cell to count as a double click.
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Whether an address points into a block's header rows or its content rows.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum RowKind {
    Header,
    Content,
}

/// One displayed cell within a rendered week.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CommentAddress {
    pub block: usize,
    pub kind: RowKind,
    pub row: usize,
    pub cell: usize,
}

impl CommentAddress {
    pub fn new(block: usize, kind: RowKind, row: usize, cell: usize) -> Self {
        Self {
            block,
            kind,
            row,
            cell,
        }
    }

    pub fn content(block: usize, row: usize, cell: usize) -> Self {
        Self::new(block, RowKind::Content, row, cell)
    }

    pub fn header(block: usize, row: usize, cell: usize) -> Self {
        Self::new(block, RowKind::Header, row, cell)
    }
}

/// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
pub fn col_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

impl fmt::Display for CommentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            RowKind::Header => "h",
            RowKind::Content => "",
        };
        write!(
            f,
            "#{} {}{}{}",
            self.block + 1,
            prefix,
            col_to_letters(self.cell),
            self.row + 1
        )
    }
}

/// What a click landed on, as resolved by the renderer's hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// A roster cell.
    Cell(CommentAddress),
    /// The open tooltip itself.
    Tooltip,
    /// The comment marker drawn on a commented cell.
    Indicator(CommentAddress),
    /// Anything else in the view.
    Elsewhere,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CommentState {
    #[default]
    Hidden,
    Shown {
        address: CommentAddress,
        text: String,
    },
}

impl CommentState {
    /// Toggle the tooltip for a commented cell.
    ///
    /// Clicking the open cell closes it; clicking another commented cell moves
    /// the tooltip there. Cells without a comment are ignored.
    pub fn click(&mut self, address: CommentAddress, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.shown_at() == Some(address) {
            *self = CommentState::Hidden;
            return;
        }
        *self = CommentState::Shown {
            address,
            text: text.to_string(),
        };
    }

    /// Close the tooltip unless the click hit the tooltip, its cell, or a
    /// comment indicator.
    pub fn click_outside(&mut self, target: &ClickTarget) {
        let Some(open) = self.shown_at() else {
            return;
        };
        let keep = match target {
            ClickTarget::Tooltip | ClickTarget::Indicator(_) => true,
            ClickTarget::Cell(address) => *address == open,
            ClickTarget::Elsewhere => false,
        };
        if !keep {
            *self = CommentState::Hidden;
        }
    }

    pub fn week_changed(&mut self) {
        *self = CommentState::Hidden;
    }

    pub fn shown_at(&self) -> Option<CommentAddress> {
        match self {
            CommentState::Hidden => None,
            CommentState::Shown { address, .. } => Some(*address),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            CommentState::Hidden => None,
            CommentState::Shown { text, .. } => Some(text),
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, CommentState::Shown { .. })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NameHighlight {
    #[default]
    None,
    Selected(String),
}

impl NameHighlight {
    /// Select a name, or deselect it when it is already selected.
    pub fn activate(&mut self, name: &str) {
        let name = name.trim();
        if self.selected() == Some(name) {
            *self = NameHighlight::None;
        } else {
            *self = NameHighlight::Selected(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = NameHighlight::None;
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            NameHighlight::None => None,
            NameHighlight::Selected(name) => Some(name),
        }
    }

    /// True if the cell text is the highlighted name.
    pub fn matches(&self, text: &str) -> bool {
        self.selected().is_some_and(|name| name == text.trim())
    }
}

/// Both interaction machines for one roster view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub comment: CommentState,
    pub highlight: NameHighlight,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation or refresh changed the displayed week.
    pub fn week_changed(&mut self) {
        self.comment.week_changed();
    }
}

/// Measures press-and-hold gestures.
#[derive(Clone, Debug, Default)]
pub struct PressTracker {
    pressed: Option<(CommentAddress, Instant)>,
}

impl PressTracker {
    pub fn press(&mut self, address: CommentAddress, at: Instant) {
        self.pressed = Some((address, at));
    }

    /// Finish a press. Returns true if it was held on the same cell for at
    /// least [`LONG_PRESS`].
    pub fn release(&mut self, address: CommentAddress, at: Instant) -> bool {
        match self.pressed.take() {
            Some((pressed, start)) => pressed == address && at.duration_since(start) >= LONG_PRESS,
            None => false,
        }
    }

    /// A press still held past the threshold, checked while waiting for input.
    pub fn held_since(&self, now: Instant) -> Option<CommentAddress> {
        self.pressed
            .filter(|(_, start)| now.duration_since(*start) >= LONG_PRESS)
            .map(|(address, _)| address)
    }

    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}

/// Detects two clicks on the same cell within [`DOUBLE_CLICK`].
#[derive(Clone, Debug, Default)]
pub struct ClickTracker {
    last: Option<(CommentAddress, Instant)>,
}

impl ClickTracker {
    /// Register a click; returns true when it completes a double click.
    pub fn click(&mut self, address: CommentAddress, at: Instant) -> bool {
        match self.last.take() {
            Some((prev, when)) if prev == address && at.duration_since(when) <= DOUBLE_CLICK => true,
            _ => {
                self.last = Some((address, at));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(block: usize, row: usize, cell: usize) -> CommentAddress {
        CommentAddress::content(block, row, cell)
    }

    #[test]
    fn test_comment_toggle_twice_hides() {
        let mut state = CommentState::default();
        state.click(addr(0, 1, 2), "swap");
        assert_eq!(state.shown_at(), Some(addr(0, 1, 2)));
        state.click(addr(0, 1, 2), "swap");
        assert_eq!(state, CommentState::Hidden);
    }

    #[test]
    fn test_comment_moves_to_new_cell() {
        let mut state = CommentState::default();
        state.click(addr(0, 1, 2), "first");
        state.click(addr(1, 0, 0), "second");
        assert_eq!(state.shown_at(), Some(addr(1, 0, 0)));
        assert_eq!(state.text(), Some("second"));
    }

    #[test]
    fn test_header_and_content_addresses_differ() {
        let mut state = CommentState::default();
        state.click(CommentAddress::header(0, 0, 1), "holiday");
        state.click(CommentAddress::content(0, 0, 1), "swap");
        assert_eq!(state.text(), Some("swap"));
    }

    #[test]
    fn test_comment_click_without_text_is_ignored() {
        let mut state = CommentState::default();
        state.click(addr(0, 0, 0), "");
        assert!(!state.is_shown());
    }

    #[test]
    fn test_click_outside() {
        let mut state = CommentState::default();
        state.click(addr(0, 1, 2), "swap");

        state.click_outside(&ClickTarget::Tooltip);
        state.click_outside(&ClickTarget::Indicator(addr(2, 2, 2)));
        state.click_outside(&ClickTarget::Cell(addr(0, 1, 2)));
        assert!(state.is_shown());

        state.click_outside(&ClickTarget::Cell(addr(0, 1, 3)));
        assert!(!state.is_shown());

        state.click(addr(0, 1, 2), "swap");
        state.click_outside(&ClickTarget::Elsewhere);
        assert!(!state.is_shown());
    }

    #[test]
    fn test_highlight_toggle_twice_clears() {
        let mut hl = NameHighlight::default();
        hl.activate("Smith");
        assert!(hl.matches(" Smith "));
        hl.activate("Smith");
        assert_eq!(hl, NameHighlight::None);
    }

    #[test]
    fn test_highlight_switches_names() {
        let mut hl = NameHighlight::default();
        hl.activate("Smith");
        hl.activate("Lee");
        assert_eq!(hl.selected(), Some("Lee"));
        hl.clear();
        assert_eq!(hl.selected(), None);
    }

    #[test]
    fn test_week_change_keeps_highlight() {
        let mut state = InteractionState::new();
        state.comment.click(addr(0, 0, 0), "note");
        state.highlight.activate("Smith");
        state.week_changed();
        assert!(!state.comment.is_shown());
        assert_eq!(state.highlight.selected(), Some("Smith"));
    }

    #[test]
    fn test_long_press_threshold() {
        let start = Instant::now();
        let mut press = PressTracker::default();

        press.press(addr(0, 0, 0), start);
        assert!(!press.release(addr(0, 0, 0), start + Duration::from_millis(599)));

        press.press(addr(0, 0, 0), start);
        assert_eq!(press.held_since(start + Duration::from_millis(100)), None);
        assert_eq!(press.held_since(start + LONG_PRESS), Some(addr(0, 0, 0)));
        assert!(press.release(addr(0, 0, 0), start + LONG_PRESS));

        press.press(addr(0, 0, 0), start);
        assert!(!press.release(addr(0, 0, 1), start + Duration::from_secs(1)));
    }

    #[test]
    fn test_double_click() {
        let start = Instant::now();
        let mut clicks = ClickTracker::default();
        assert!(!clicks.click(addr(0, 0, 0), start));
        assert!(clicks.click(addr(0, 0, 0), start + Duration::from_millis(200)));
        assert!(!clicks.click(addr(0, 0, 0), start + Duration::from_millis(300)));
        assert!(!clicks.click(addr(0, 0, 1), start + Duration::from_millis(350)));
    }

    #[test]
    fn test_address_display() {
        assert_eq!(addr(0, 2, 1).to_string(), "#1 B3");
        assert_eq!(CommentAddress::header(1, 0, 27).to_string(), "#2 hAB1");
    }
}
