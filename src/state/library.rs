//! Library corpus cache and its derived filtered view.
//!
//! The corpus is fetched once per session and never invalidated. The
//! filtered view is recomputed on every keystroke; the corpus is small
//! enough that a linear scan per keystroke is fine.

use crate::models::Hymn;

/// The hymn corpus, fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct LibraryCache {
    hymns: Vec<Hymn>,
    loaded: bool,
    seq: u64,
}

impl LibraryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the corpus fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The full corpus, server order.
    pub fn hymns(&self) -> &[Hymn] {
        &self.hymns
    }

    /// Start the one-shot corpus fetch, returning the token the completion
    /// must echo.
    pub fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Store the fetched corpus. Stale completions are discarded.
    pub fn apply_loaded(&mut self, token: u64, hymns: Vec<Hymn>) {
        if token != self.seq {
            tracing::debug!(token, current = self.seq, "discarding stale library load");
            return;
        }
        self.hymns = hymns;
        self.loaded = true;
    }

    /// All hymns whose title contains `term`, case-insensitively.
    ///
    /// An empty term yields the full corpus. Order-preserving and pure:
    /// the same term always yields the same sequence.
    pub fn filtered_view(&self, term: &str) -> Vec<&Hymn> {
        let needle = term.to_lowercase();
        self.hymns
            .iter()
            .filter(|hymn| hymn.title.to_lowercase().contains(&needle))
            .collect()
    }
}
