//! Main application modules.
//!
//! Terminal rendering of results, statistics printing and shutdown handling
//! used by the command-line binary.

pub mod render;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use render::{
    render_domain_analysis, render_history, render_keyword_analysis, render_regions,
    render_view, sparkline,
};
pub use shutdown::shutdown_signal;
pub use statistics::print_search_statistics;
