//! Messages delivered to the event loop by background fetch tasks.

use crate::error::ApiError;
use crate::models::{DailyVerse, Hymn, SolveResponse};

/// Completion of an async operation, sent over the app's message channel.
///
/// Every message echoes the request token it was issued with; the app
/// discards messages whose token is no longer the latest for that unit.
#[derive(Debug)]
pub enum AppMessage {
    /// `GET /library` completed.
    LibraryLoaded {
        token: u64,
        result: Result<Vec<Hymn>, ApiError>,
    },
    /// `GET /random` completed.
    DailyVerseLoaded {
        token: u64,
        result: Result<Option<DailyVerse>, ApiError>,
    },
    /// `POST /solve` completed.
    SolveCompleted {
        token: u64,
        result: Result<SolveResponse, ApiError>,
    },
}
