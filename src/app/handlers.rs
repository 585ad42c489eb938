//! Keyboard handling, dispatched by tab and mode.
//!
//! Global binds: Ctrl+C quits, Tab toggles the active tab. Everything else
//! routes to the active tab — the oracle query input, the library shelf
//! (filter + cursor), or the reading view (scrolling).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::state::Tab;
use crate::traits::HttpClient;

/// Lines scrolled by PageUp/PageDown in reading mode.
const READING_PAGE_LINES: u16 = 10;

impl<C: HttpClient + 'static> App<C> {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global binds, active on every tab
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.view.switch_tab(self.view.active_tab.toggled());
                return;
            }
            _ => {}
        }

        match self.view.active_tab {
            Tab::Oracle => self.handle_oracle_key(key),
            Tab::Library => {
                if self.view.is_reading() {
                    self.handle_reading_key(key);
                } else {
                    self.handle_shelf_key(key);
                }
            }
        }
    }

    fn handle_oracle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_query(),
            KeyCode::Backspace => {
                self.oracle.query.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.oracle.query.push(c);
            }
            _ => {}
        }
    }

    fn handle_shelf_key(&mut self, key: KeyEvent) {
        let filtered_len = self
            .library
            .filtered_view(&self.view.library_search)
            .len();

        match key.code {
            KeyCode::Up => self.view.shelf_cursor_up(),
            KeyCode::Down => self.view.shelf_cursor_down(filtered_len),
            KeyCode::Enter => {
                let selected = self
                    .library
                    .filtered_view(&self.view.library_search)
                    .get(self.view.shelf_cursor)
                    .map(|hymn| (*hymn).clone());
                if let Some(hymn) = selected {
                    self.view.select(hymn);
                }
            }
            KeyCode::Backspace => {
                self.view.library_search.pop();
                self.reclamp_shelf_cursor();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.view.library_search.push(c);
                self.reclamp_shelf_cursor();
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.view.clear_selection(),
            KeyCode::Up => self.view.reading_scroll_up(1),
            KeyCode::Down => self.view.reading_scroll_down(1),
            KeyCode::PageUp => self.view.reading_scroll_up(READING_PAGE_LINES),
            KeyCode::PageDown => self.view.reading_scroll_down(READING_PAGE_LINES),
            _ => {}
        }
    }

    /// The filter just changed; keep the cursor inside the new view.
    fn reclamp_shelf_cursor(&mut self) {
        let filtered_len = self
            .library
            .filtered_view(&self.view.library_search)
            .len();
        self.view.clamp_shelf_cursor(filtered_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::config::Config;
    use crate::models::Hymn;

    fn app() -> App<MockHttpClient> {
        App::with_client(Config::default(), MockHttpClient::new())
    }

    fn app_with_library(titles: &[&str]) -> App<MockHttpClient> {
        let mut app = app();
        let token = app.library.begin_load();
        app.library.apply_loaded(
            token,
            titles
                .iter()
                .map(|t| Hymn {
                    title: t.to_string(),
                    verse: String::new(),
                    source: String::new(),
                    content: String::new(),
                    book: 1,
                    hymn: 1,
                })
                .collect(),
        );
        app
    }

    fn press(app: &mut App<MockHttpClient>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_toggles_active_tab() {
        let mut app = app();
        assert_eq!(app.view.active_tab, Tab::Oracle);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.active_tab, Tab::Library);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.active_tab, Tab::Oracle);
    }

    #[test]
    fn test_tab_switch_preserves_selection_and_search() {
        let mut app = app_with_library(&["Hymn of Fire"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        assert!(app.view.is_reading());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.library_search, "f");
        assert!(app.view.is_reading());
    }

    #[test]
    fn test_oracle_typing_and_backspace() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.oracle.query, "om");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.oracle.query, "o");
    }

    #[test]
    fn test_shelf_typing_filters_and_clamps_cursor() {
        let mut app = app_with_library(&["Hymn of Dawn", "Hymn of Fire"]);
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.view.shelf_cursor, 1);

        // "fire" narrows the view to one hymn; the cursor follows
        for c in "fire".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.view.library_search, "fire");
        assert_eq!(app.view.shelf_cursor, 0);
    }

    #[test]
    fn test_shelf_enter_opens_reading_mode() {
        let mut app = app_with_library(&["Hymn of Dawn", "Hymn of Fire"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.view.selected_hymn.as_ref().map(|h| h.title.as_str()),
            Some("Hymn of Fire")
        );
    }

    #[test]
    fn test_shelf_enter_on_empty_view_is_noop() {
        let mut app = app_with_library(&["Hymn of Dawn"]);
        press(&mut app, KeyCode::Tab);
        for c in "storm".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.view.is_reading());
    }

    #[test]
    fn test_reading_esc_returns_to_shelf() {
        let mut app = app_with_library(&["Hymn of Dawn"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.view.is_reading());

        press(&mut app, KeyCode::Esc);
        assert!(!app.view.is_reading());
    }

    #[test]
    fn test_reading_scroll_keys() {
        let mut app = app_with_library(&["Hymn of Dawn"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.view.reading_scroll, 1 + READING_PAGE_LINES);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.view.reading_scroll, READING_PAGE_LINES);
    }
}
