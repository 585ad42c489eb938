//! Data model for the oracle and library endpoints.
//!
//! All types are plain serde structs mirroring the backend's JSON shapes.
//! Optional fields use `#[serde(default)]` so a sparse payload degrades to
//! empty values instead of a decode failure.

use serde::{Deserialize, Serialize};

/// A hymn in the library corpus.
///
/// Identity is structural; the list position in the corpus is the key.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hymn {
    pub title: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub content: String,
    /// Book number within the corpus
    #[serde(default)]
    pub book: u32,
    /// Hymn number within the book
    #[serde(default)]
    pub hymn: u32,
}

/// A ranked match returned by the solver.
///
/// Ephemeral: replaced wholesale on each new query, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionMatch {
    pub title: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub source: String,
    /// Relevance score in [0, 1], as ranked by the server
    #[serde(default)]
    pub score: f64,
}

impl SolutionMatch {
    /// Score formatted as a whole percentage, e.g. `91%`.
    pub fn score_percent(&self) -> String {
        format!("{}%", (self.score * 100.0).round() as u32)
    }
}

/// The verse of the moment, fetched once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVerse {
    pub verse: String,
    pub title: String,
    pub source: String,
}

/// Response envelope for `GET /library`.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryResponse {
    /// Missing `books` is an empty corpus, not an error.
    #[serde(default)]
    pub books: Vec<Hymn>,
}

/// Raw payload of `GET /random`.
///
/// The endpoint may return an object lacking the expected fields; such a
/// payload means "no daily verse" rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomVerseResponse {
    #[serde(default)]
    pub verse: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl RandomVerseResponse {
    /// Promote to a [`DailyVerse`] if every required field is present.
    pub fn into_verse(self) -> Option<DailyVerse> {
        Some(DailyVerse {
            verse: self.verse?,
            title: self.title?,
            source: self.source?,
        })
    }
}

/// Request body for `POST /solve`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveRequest<'a> {
    pub problem: &'a str,
}

/// Response envelope for `POST /solve`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveResponse {
    /// Ranked matches in server order; empty means silence.
    #[serde(default)]
    pub solutions: Vec<SolutionMatch>,
    /// Optional silence message supplied by the server.
    #[serde(default)]
    pub message: Option<String>,
}
