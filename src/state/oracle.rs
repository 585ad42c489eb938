//! Oracle session state: the solve request lifecycle.
//!
//! State transitions:
//!
//! - [`OracleSession::begin_submit`] starts a request: clears prior results,
//!   raises the loading flag, and issues a fresh request token.
//! - [`OracleSession::apply_response`] finishes one: applies matches,
//!   silence, or an error, and lowers the loading flag last.
//!
//! Invariant: at most one of {loading, matches non-empty, silence set,
//! error set} holds at any time. A response whose token is not the latest
//! issued one is discarded, so a slow superseded request can never
//! overwrite a newer result.

use crate::error::ApiError;
use crate::models::{DailyVerse, SolutionMatch, SolveResponse};
use crate::state::DailyVerseSlot;

/// Shown when the solver returns zero matches and no message of its own.
pub const DEFAULT_SILENCE_MESSAGE: &str = "The Veda is silent.";

/// Outcome of a completed solve request.
#[derive(Debug)]
pub enum SolveOutcome {
    /// One or more matches, in server rank order.
    Matches(Vec<SolutionMatch>),
    /// Zero matches; the server's silence message, if it sent one.
    Silence(Option<String>),
    /// Transport or decode failure.
    Failed(ApiError),
}

impl From<SolveResponse> for SolveOutcome {
    fn from(response: SolveResponse) -> Self {
        if response.solutions.is_empty() {
            SolveOutcome::Silence(response.message)
        } else {
            SolveOutcome::Matches(response.solutions)
        }
    }
}

/// Which panel the oracle tab shows below/above the query input.
///
/// Produced by [`OracleSession::panel`]; exactly one variant holds for any
/// session state. Loading is orthogonal: it only affects the busy glyph on
/// the submit control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OraclePanel<'a> {
    /// The solver explicitly found nothing.
    Silence(&'a str),
    /// Ranked matches, in server order.
    Matches(&'a [SolutionMatch]),
    /// A request failed; distinct from silence.
    Error(&'a str),
    /// Idle with a loaded verse of the moment.
    DailyVerse(&'a DailyVerse),
    /// Idle, nothing to show.
    Empty,
}

/// State for the oracle query lifecycle.
#[derive(Debug, Clone, Default)]
pub struct OracleSession {
    /// Query text under edit
    pub query: String,
    /// True while a solve request is in flight
    is_loading: bool,
    /// Latest result list, server rank order
    matches: Vec<SolutionMatch>,
    /// Silence message from the latest completed request
    silence_message: Option<String>,
    /// Error message from the latest failed request
    error_message: Option<String>,
    /// Token of the most recently issued request
    seq: u64,
}

impl OracleSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn matches(&self) -> &[SolutionMatch] {
        &self.matches
    }

    pub fn silence_message(&self) -> Option<&str> {
        self.silence_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Token of the most recently issued request.
    pub fn current_token(&self) -> u64 {
        self.seq
    }

    /// Start a solve submission.
    ///
    /// No-op (returns `None`) when the query is blank or a request is
    /// already in flight. Otherwise clears all prior result state, raises
    /// the loading flag, and returns the trimmed query together with the
    /// token the completion must echo.
    pub fn begin_submit(&mut self) -> Option<(String, u64)> {
        if self.is_loading {
            return None;
        }

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.matches.clear();
        self.silence_message = None;
        self.error_message = None;
        self.is_loading = true;
        self.seq += 1;

        Some((trimmed.to_string(), self.seq))
    }

    /// Apply a completed solve request.
    ///
    /// Completions carrying a stale token are discarded. The loading flag
    /// is lowered as the final step.
    pub fn apply_response(&mut self, token: u64, outcome: SolveOutcome) {
        if token != self.seq {
            tracing::debug!(token, current = self.seq, "discarding stale solve response");
            return;
        }

        match outcome {
            SolveOutcome::Matches(matches) => {
                self.matches = matches;
            }
            SolveOutcome::Silence(message) => {
                let message = message
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_SILENCE_MESSAGE.to_string());
                self.silence_message = Some(message);
            }
            SolveOutcome::Failed(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "solve request failed");
                self.error_message = Some(err.user_message());
            }
        }

        self.is_loading = false;
    }

    /// Resolve the display precedence for the oracle tab.
    ///
    /// First match wins: silence, then matches, then error, then the daily
    /// verse if its slot has loaded. Loading does not suppress the daily
    /// verse panel; it only drives the busy glyph on the submit control.
    pub fn panel<'a>(&'a self, daily: &'a DailyVerseSlot) -> OraclePanel<'a> {
        if let Some(message) = self.silence_message.as_deref() {
            return OraclePanel::Silence(message);
        }
        if !self.matches.is_empty() {
            return OraclePanel::Matches(&self.matches);
        }
        if let Some(message) = self.error_message.as_deref() {
            return OraclePanel::Error(message);
        }
        if let Some(verse) = daily.verse() {
            return OraclePanel::DailyVerse(verse);
        }
        OraclePanel::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(n: usize) -> Vec<SolutionMatch> {
        (0..n)
            .map(|i| SolutionMatch {
                title: format!("Match {}", i),
                verse: "verse".to_string(),
                source: "source".to_string(),
                score: 0.9 - i as f64 * 0.1,
            })
            .collect()
    }

    #[test]
    fn test_begin_submit_blank_query_is_noop() {
        let mut session = OracleSession::new();
        assert!(session.begin_submit().is_none());

        session.query = "   \t ".to_string();
        assert!(session.begin_submit().is_none());
        assert!(!session.is_loading());
        assert_eq!(session.current_token(), 0);
    }

    #[test]
    fn test_begin_submit_trims_and_issues_token() {
        let mut session = OracleSession::new();
        session.query = "  how to find peace?  ".to_string();

        let (problem, token) = session.begin_submit().unwrap();
        assert_eq!(problem, "how to find peace?");
        assert_eq!(token, 1);
        assert!(session.is_loading());
    }

    #[test]
    fn test_begin_submit_clears_prior_results() {
        let mut session = OracleSession::new();
        session.query = "first".to_string();
        let (_, token) = session.begin_submit().unwrap();
        session.apply_response(token, SolveOutcome::Matches(matches(2)));
        assert_eq!(session.matches().len(), 2);

        session.query = "second".to_string();
        let _ = session.begin_submit().unwrap();
        assert!(session.matches().is_empty());
        assert!(session.silence_message().is_none());
        assert!(session.error_message().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_begin_submit_rejected_while_loading() {
        let mut session = OracleSession::new();
        session.query = "first".to_string();
        let (_, token) = session.begin_submit().unwrap();

        session.query = "second".to_string();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.current_token(), token);
    }

    #[test]
    fn test_loading_transitions_once_per_call() {
        let mut session = OracleSession::new();
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        assert!(session.is_loading());

        session.apply_response(token, SolveOutcome::Matches(matches(1)));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_matches_keep_server_order() {
        let mut session = OracleSession::new();
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();

        let ranked = vec![
            SolutionMatch {
                title: "a".to_string(),
                verse: String::new(),
                source: String::new(),
                score: 0.91,
            },
            SolutionMatch {
                title: "b".to_string(),
                verse: String::new(),
                source: String::new(),
                score: 0.42,
            },
        ];
        session.apply_response(token, SolveOutcome::Matches(ranked));

        let scores: Vec<f64> = session.matches().iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![0.91, 0.42]);
    }

    #[test]
    fn test_silence_uses_server_message() {
        let mut session = OracleSession::new();
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();

        session.apply_response(
            token,
            SolveOutcome::Silence(Some("Reflect further.".to_string())),
        );
        assert_eq!(session.silence_message(), Some("Reflect further."));
        assert!(session.matches().is_empty());
    }

    #[test]
    fn test_silence_falls_back_to_default() {
        let mut session = OracleSession::new();
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        session.apply_response(token, SolveOutcome::Silence(None));
        assert_eq!(session.silence_message(), Some(DEFAULT_SILENCE_MESSAGE));

        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        session.apply_response(token, SolveOutcome::Silence(Some("   ".to_string())));
        assert_eq!(session.silence_message(), Some(DEFAULT_SILENCE_MESSAGE));
    }

    #[test]
    fn test_failure_sets_error_not_silence() {
        let mut session = OracleSession::new();
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();

        session.apply_response(
            token,
            SolveOutcome::Failed(ApiError::Connection("refused".to_string())),
        );
        assert!(session.error_message().is_some());
        assert!(session.silence_message().is_none());
        assert!(session.matches().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut session = OracleSession::new();
        session.query = "first".to_string();
        let (_, stale) = session.begin_submit().unwrap();
        session.apply_response(stale, SolveOutcome::Silence(None));

        session.query = "second".to_string();
        let (_, current) = session.begin_submit().unwrap();
        session.apply_response(current, SolveOutcome::Matches(matches(1)));

        // The first request's completion arrives late
        session.apply_response(stale, SolveOutcome::Silence(Some("late".to_string())));
        assert_eq!(session.matches().len(), 1);
        assert!(session.silence_message().is_none());
    }

    #[test]
    fn test_exactly_one_final_state_holds() {
        let mut session = OracleSession::new();
        let daily = DailyVerseSlot::default();

        // Idle
        assert_eq!(session.panel(&daily), OraclePanel::Empty);

        // Loading: still Empty (daily verse not loaded), busy flag set
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        assert!(session.is_loading());
        assert_eq!(session.panel(&daily), OraclePanel::Empty);

        // Matches
        session.apply_response(token, SolveOutcome::Matches(matches(1)));
        assert!(matches!(session.panel(&daily), OraclePanel::Matches(_)));

        // Silence replaces matches on the next cycle
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        session.apply_response(token, SolveOutcome::Silence(None));
        assert!(matches!(session.panel(&daily), OraclePanel::Silence(_)));
    }

    #[test]
    fn test_daily_verse_shows_only_when_idle_and_loaded() {
        let mut daily = DailyVerseSlot::default();
        let token = daily.begin_load();
        daily.apply_loaded(
            token,
            Some(crate::models::DailyVerse {
                verse: "v".to_string(),
                title: "t".to_string(),
                source: "s".to_string(),
            }),
        );

        let mut session = OracleSession::new();
        assert!(matches!(session.panel(&daily), OraclePanel::DailyVerse(_)));

        // Loading alone does not suppress the daily verse
        session.query = "query".to_string();
        let (_, token) = session.begin_submit().unwrap();
        assert!(matches!(session.panel(&daily), OraclePanel::DailyVerse(_)));

        // Silence does
        session.apply_response(token, SolveOutcome::Silence(None));
        assert!(matches!(session.panel(&daily), OraclePanel::Silence(_)));
    }

    #[test]
    fn test_outcome_from_response() {
        let with_solutions = SolveResponse {
            solutions: matches(1),
            message: None,
        };
        assert!(matches!(
            SolveOutcome::from(with_solutions),
            SolveOutcome::Matches(_)
        ));

        let empty = SolveResponse {
            solutions: vec![],
            message: Some("Reflect further.".to_string()),
        };
        match SolveOutcome::from(empty) {
            SolveOutcome::Silence(Some(msg)) => assert_eq!(msg, "Reflect further."),
            other => panic!("expected silence, got {:?}", other),
        }
    }
}
