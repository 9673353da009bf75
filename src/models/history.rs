//! Recent-search history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnalysisMode;
use crate::config::HISTORY_CAPACITY;

/// One successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query: String,
    /// Mode the query ran in; replaying the entry keeps this mode.
    #[serde(rename = "type")]
    pub mode: AnalysisMode,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl SearchHistoryEntry {
    pub fn new(query: impl Into<String>, mode: AnalysisMode) -> Self {
        Self {
            query: query.into(),
            mode,
            timestamp: Utc::now(),
        }
    }
}

/// Most-recent-first list of searches, unique by query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<SearchHistoryEntry>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    HISTORY_CAPACITY
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an entry at the front.
    ///
    /// Any older entry with the same query text is removed first, then the
    /// list is truncated to capacity, dropping the oldest entries.
    pub fn push(&mut self, entry: SearchHistoryEntry) {
        self.entries.retain(|existing| existing.query != entry.query);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn get(&self, index: usize) -> Option<&SearchHistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SearchHistoryEntry] {
        &self.entries
    }

    /// Query texts, most recent first.
    pub fn queries(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.query.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
