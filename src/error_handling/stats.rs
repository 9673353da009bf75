//! Search statistics tracking.
//!
//! Thread-safe counters for completed, failed and superseded searches,
//! shared between the coordinator and the dashboard API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use strum::IntoEnumIterator;

use super::types::ErrorType;
use crate::models::AnalysisMode;

/// Thread-safe search statistics tracker.
///
/// All error types are initialized to zero on creation, so incrementing never
/// allocates and never needs a lock.
pub struct SearchStats {
    keyword_successes: AtomicUsize,
    domain_successes: AtomicUsize,
    superseded: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

/// Point-in-time copy of [`SearchStats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub keyword_successes: usize,
    pub domain_successes: usize,
    pub superseded: usize,
    pub total_errors: usize,
    /// Non-zero error counts keyed by category label
    pub errors: Vec<(String, usize)>,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        SearchStats {
            keyword_successes: AtomicUsize::new(0),
            domain_successes: AtomicUsize::new(0),
            superseded: AtomicUsize::new(0),
            errors,
        }
    }

    pub fn record_success(&self, mode: AnalysisMode) {
        let counter = match mode {
            AnalysisMode::KeywordOverview => &self.keyword_successes,
            AnalysisMode::DomainOverview => &self.domain_successes,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                error
            );
        }
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    pub fn total_successes(&self) -> usize {
        self.keyword_successes.load(Ordering::Relaxed)
            + self.domain_successes.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let errors = ErrorType::iter()
            .map(|error| (error.as_str().to_string(), self.get_error_count(error)))
            .filter(|(_, count)| *count > 0)
            .collect();
        StatsSnapshot {
            keyword_successes: self.keyword_successes.load(Ordering::Relaxed),
            domain_successes: self.domain_successes.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            total_errors: self.total_errors(),
            errors,
        }
    }
}
