//! Navigation state: active tab, reading selection, filter term, cursors.
//!
//! Transitions here are pure and total: switching tabs never touches the
//! selection or the search term, so reading position and the filtered
//! shelf are restored exactly when the user returns.

use crate::models::Hymn;

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Oracle,
    Library,
}

impl Tab {
    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            Tab::Oracle => Tab::Library,
            Tab::Library => Tab::Oracle,
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Oracle => 0,
            Tab::Library => 1,
        }
    }
}

/// Navigation state for the whole session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Active tab
    pub active_tab: Tab,
    /// Hymn open in reading mode; only meaningful on the library tab,
    /// preserved across tab switches
    pub selected_hymn: Option<Hymn>,
    /// Shelf filter term
    pub library_search: String,
    /// Cursor position within the filtered shelf view
    pub shelf_cursor: usize,
    /// Scroll offset in reading mode
    pub reading_scroll: u16,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs unconditionally. Selection and search term are kept.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Enter reading mode on the given hymn.
    pub fn select(&mut self, hymn: Hymn) {
        self.selected_hymn = Some(hymn);
        self.reading_scroll = 0;
    }

    /// Return to shelf mode. The filter term is untouched.
    pub fn clear_selection(&mut self) {
        self.selected_hymn = None;
    }

    /// Whether the library tab is in reading mode.
    pub fn is_reading(&self) -> bool {
        self.selected_hymn.is_some()
    }

    /// Keep the shelf cursor within the filtered view's bounds.
    pub fn clamp_shelf_cursor(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            self.shelf_cursor = 0;
        } else if self.shelf_cursor >= filtered_len {
            self.shelf_cursor = filtered_len - 1;
        }
    }

    /// Move the shelf cursor up.
    pub fn shelf_cursor_up(&mut self) {
        self.shelf_cursor = self.shelf_cursor.saturating_sub(1);
    }

    /// Move the shelf cursor down, clamped to the filtered view.
    pub fn shelf_cursor_down(&mut self, filtered_len: usize) {
        if filtered_len > 0 && self.shelf_cursor + 1 < filtered_len {
            self.shelf_cursor += 1;
        }
    }

    /// Scroll the reading view up by `lines`.
    pub fn reading_scroll_up(&mut self, lines: u16) {
        self.reading_scroll = self.reading_scroll.saturating_sub(lines);
    }

    /// Scroll the reading view down by `lines`.
    pub fn reading_scroll_down(&mut self, lines: u16) {
        self.reading_scroll = self.reading_scroll.saturating_add(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hymn(title: &str) -> Hymn {
        Hymn {
            title: title.to_string(),
            verse: String::new(),
            source: String::new(),
            content: String::new(),
            book: 2,
            hymn: 7,
        }
    }

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.active_tab, Tab::Oracle);
        assert!(view.selected_hymn.is_none());
        assert!(view.library_search.is_empty());
    }

    #[test]
    fn test_switch_tab_preserves_selection_and_search() {
        let mut view = ViewState::new();
        view.library_search = "fire".to_string();
        view.select(hymn("Hymn of Fire"));

        view.switch_tab(Tab::Oracle);
        view.switch_tab(Tab::Library);

        assert_eq!(view.library_search, "fire");
        assert_eq!(
            view.selected_hymn.as_ref().map(|h| h.title.as_str()),
            Some("Hymn of Fire")
        );
    }

    #[test]
    fn test_select_and_clear_round_trip_keeps_search() {
        let mut view = ViewState::new();
        view.library_search = "dawn".to_string();

        view.select(hymn("Hymn of Dawn"));
        assert!(view.is_reading());

        view.clear_selection();
        assert!(!view.is_reading());
        assert_eq!(view.library_search, "dawn");
    }

    #[test]
    fn test_select_resets_reading_scroll() {
        let mut view = ViewState::new();
        view.reading_scroll_down(10);
        view.select(hymn("A"));
        assert_eq!(view.reading_scroll, 0);
    }

    #[test]
    fn test_tab_toggled() {
        assert_eq!(Tab::Oracle.toggled(), Tab::Library);
        assert_eq!(Tab::Library.toggled(), Tab::Oracle);
    }

    #[test]
    fn test_shelf_cursor_clamps_to_filtered_len() {
        let mut view = ViewState::new();
        view.shelf_cursor = 5;
        view.clamp_shelf_cursor(3);
        assert_eq!(view.shelf_cursor, 2);

        view.clamp_shelf_cursor(0);
        assert_eq!(view.shelf_cursor, 0);
    }

    #[test]
    fn test_shelf_cursor_movement_bounds() {
        let mut view = ViewState::new();
        view.shelf_cursor_up();
        assert_eq!(view.shelf_cursor, 0);

        view.shelf_cursor_down(2);
        assert_eq!(view.shelf_cursor, 1);
        view.shelf_cursor_down(2);
        assert_eq!(view.shelf_cursor, 1);

        view.shelf_cursor_down(0);
        assert_eq!(view.shelf_cursor, 1);
    }

    #[test]
    fn test_reading_scroll_saturates() {
        let mut view = ViewState::new();
        view.reading_scroll_up(5);
        assert_eq!(view.reading_scroll, 0);
        view.reading_scroll_down(3);
        view.reading_scroll_up(1);
        assert_eq!(view.reading_scroll, 2);
    }
}
