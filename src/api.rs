//! Oracle API client.
//!
//! One method per backend endpoint, each returning the typed payload:
//!
//! - `GET /library` — the full hymn corpus
//! - `GET /random` — the verse of the moment
//! - `POST /solve` — ranked matches for a free-text problem
//!
//! The client is generic over [`HttpClient`] so the full request lifecycle
//! can be driven in tests through the mock adapter.

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    DailyVerse, Hymn, LibraryResponse, RandomVerseResponse, SolveRequest, SolveResponse,
};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the oracle backend.
#[derive(Debug, Clone)]
pub struct OracleApi<C: HttpClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> OracleApi<C> {
    /// Create a new client against the configured base URL.
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject non-2xx responses with the body text as the message.
    fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::Status {
            status: response.status,
            message: response.text().unwrap_or_default(),
        })
    }

    /// Fetch the full hymn corpus.
    ///
    /// Server order is preserved; a payload without `books` is an empty
    /// corpus.
    pub async fn library(&self) -> Result<Vec<Hymn>, ApiError> {
        let url = self.endpoint("/library");
        let response = self.client.get(&url, &Headers::new()).await?;
        Self::check_status(&response)?;
        let parsed: LibraryResponse = response.json()?;
        Ok(parsed.books)
    }

    /// Fetch the verse of the moment.
    ///
    /// Returns `Ok(None)` when the payload lacks the required fields.
    pub async fn daily_verse(&self) -> Result<Option<DailyVerse>, ApiError> {
        let url = self.endpoint("/random");
        let response = self.client.get(&url, &Headers::new()).await?;
        Self::check_status(&response)?;
        let parsed: RandomVerseResponse = response.json()?;
        Ok(parsed.into_verse())
    }

    /// Submit a problem statement to the solver.
    pub async fn solve(&self, problem: &str) -> Result<SolveResponse, ApiError> {
        let url = self.endpoint("/solve");
        let body = serde_json::to_string(&SolveRequest { problem })?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self.client.post(&url, &body, &headers).await?;
        Self::check_status(&response)?;
        Ok(response.json()?)
    }
}
