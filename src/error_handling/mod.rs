//! Error handling and search statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror` enums for the library surface)
//! - Failure categorization for statistics
//! - Thread-safe search statistics
//!
//! Transport failures and response-shape failures are distinct variants here
//! but reach the user as a single message string.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use stats::{SearchStats, StatsSnapshot};
pub use types::{AnalysisError, ErrorType, InitializationError, ValidationError, ValidationReason};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisMode;
    use strum::IntoEnumIterator;

    #[test]
    fn test_search_stats_initialization() {
        let stats = SearchStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_successes(), 0);
    }

    #[test]
    fn test_search_stats_increment() {
        let stats = SearchStats::new();
        stats.increment_error(ErrorType::MalformedJson);
        stats.increment_error(ErrorType::MalformedJson);
        stats.increment_error(ErrorType::HttpQuotaExceeded);
        stats.record_success(AnalysisMode::KeywordOverview);
        stats.record_success(AnalysisMode::DomainOverview);
        stats.record_superseded();

        assert_eq!(stats.get_error_count(ErrorType::MalformedJson), 2);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.total_successes(), 2);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.superseded, 1);
        assert_eq!(snapshot.keyword_successes, 1);
        assert_eq!(snapshot.domain_successes, 1);
        assert_eq!(snapshot.errors.len(), 2);
    }
}
