//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, SearchStats};

/// Logs search and error counters.
pub fn print_search_statistics(stats: &SearchStats) {
    let snapshot = stats.snapshot();
    info!(
        "Searches: {} keyword, {} domain, {} superseded",
        snapshot.keyword_successes, snapshot.domain_successes, snapshot.superseded
    );

    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}
