//! Application state and logic for the TUI.
//!
//! [`App`] composes the four state units (oracle session, library cache,
//! daily verse slot, view state) with the message channel that delivers
//! async completions back to the event loop. Background tasks only perform
//! I/O; every state mutation happens on the event loop via
//! [`App::handle_message`] or the key handlers.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::api::OracleApi;
use crate::config::Config;
use crate::state::{DailyVerseSlot, LibraryCache, OracleSession, SolveOutcome, ViewState};
use crate::traits::HttpClient;

/// Main application state.
pub struct App<C: HttpClient = ReqwestHttpClient> {
    /// Oracle query lifecycle
    pub oracle: OracleSession,
    /// Hymn corpus and filter
    pub library: LibraryCache,
    /// Verse of the moment
    pub daily_verse: DailyVerseSlot,
    /// Navigation state
    pub view: ViewState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Whether the next loop iteration should redraw
    pub needs_redraw: bool,
    /// Animation frame counter for the busy spinner
    pub spinner_frame: usize,
    /// Receiver for async completions (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async completions (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// API client shared with spawned tasks
    api: Arc<OracleApi<C>>,
}

impl App<ReqwestHttpClient> {
    /// Create an app backed by the production HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            config,
            ReqwestHttpClient::with_client(client),
        ))
    }
}

impl<C: HttpClient + 'static> App<C> {
    /// Create an app over any HTTP client implementation.
    pub fn with_client(config: Config, client: C) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            oracle: OracleSession::new(),
            library: LibraryCache::new(),
            daily_verse: DailyVerseSlot::new(),
            view: ViewState::new(),
            should_quit: false,
            needs_redraw: true,
            spinner_frame: 0,
            message_rx: Some(message_rx),
            message_tx,
            api: Arc::new(OracleApi::new(&config, client)),
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Signal the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Called on every loop tick.
    pub fn tick(&mut self) {
        if self.oracle.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.needs_redraw = true;
        }
    }

    /// Issue the two one-shot fetches (library corpus, daily verse).
    /// Called once at startup.
    pub fn load_initial_data(&mut self) {
        let token = self.library.begin_load();
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.library().await;
            let _ = tx.send(AppMessage::LibraryLoaded { token, result });
        });

        let token = self.daily_verse.begin_load();
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.daily_verse().await;
            let _ = tx.send(AppMessage::DailyVerseLoaded { token, result });
        });
    }

    /// Submit the current oracle query.
    ///
    /// No-op when the query is blank or a request is already in flight;
    /// both guards live in [`OracleSession::begin_submit`].
    pub fn submit_query(&mut self) {
        let Some((problem, token)) = self.oracle.begin_submit() else {
            return;
        };
        self.mark_dirty();

        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.solve(&problem).await;
            let _ = tx.send(AppMessage::SolveCompleted { token, result });
        });
    }

    /// Apply a completed async operation to the owning state unit.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LibraryLoaded { token, result } => match result {
                Ok(hymns) => {
                    tracing::info!(count = hymns.len(), "library loaded");
                    self.library.apply_loaded(token, hymns);
                    let filtered_len = self
                        .library
                        .filtered_view(&self.view.library_search)
                        .len();
                    self.view.clamp_shelf_cursor(filtered_len);
                }
                Err(err) => {
                    tracing::warn!(code = err.error_code(), error = %err, "library fetch failed");
                }
            },
            AppMessage::DailyVerseLoaded { token, result } => match result {
                Ok(verse) => self.daily_verse.apply_loaded(token, verse),
                Err(err) => {
                    tracing::warn!(code = err.error_code(), error = %err, "daily verse fetch failed");
                }
            },
            AppMessage::SolveCompleted { token, result } => {
                let outcome = match result {
                    Ok(response) => SolveOutcome::from(response),
                    Err(err) => SolveOutcome::Failed(err),
                };
                self.oracle.apply_response(token, outcome);
            }
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;

    #[test]
    fn test_app_initial_state() {
        let app = App::with_client(Config::default(), MockHttpClient::new());
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
        assert!(!app.oracle.is_loading());
        assert!(!app.library.is_loaded());
        assert!(app.daily_verse.verse().is_none());
        assert!(app.message_rx.is_some());
    }

    #[test]
    fn test_tick_animates_only_while_loading() {
        let mut app = App::with_client(Config::default(), MockHttpClient::new());
        app.needs_redraw = false;
        app.tick();
        assert_eq!(app.spinner_frame, 0);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::with_client(Config::default(), MockHttpClient::new());
        app.quit();
        assert!(app.should_quit);
    }
}
