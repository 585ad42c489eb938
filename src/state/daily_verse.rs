//! The verse-of-the-moment slot.
//!
//! Holds at most one verse, fetched once at startup and never refreshed.
//! A failed or incomplete fetch leaves the slot empty; the panel simply
//! does not render.

use crate::models::DailyVerse;

/// One-shot slot for the verse of the moment.
#[derive(Debug, Clone, Default)]
pub struct DailyVerseSlot {
    verse: Option<DailyVerse>,
    seq: u64,
}

impl DailyVerseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded verse, if any.
    pub fn verse(&self) -> Option<&DailyVerse> {
        self.verse.as_ref()
    }

    /// Start the one-shot fetch, returning the token the completion must
    /// echo.
    pub fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Fill the slot. Stale completions are discarded; `None` leaves the
    /// slot empty.
    pub fn apply_loaded(&mut self, token: u64, verse: Option<DailyVerse>) {
        if token != self.seq {
            tracing::debug!(token, current = self.seq, "discarding stale verse load");
            return;
        }
        self.verse = verse;
    }
}
