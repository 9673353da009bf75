//! CSV export of result tables.
//!
//! Keyword-idea lists, SERP rows and domain top keywords can be rendered to
//! CSV in memory (for the dashboard API) or written into a directory (for the
//! command line).

mod csv;
mod types;

pub use csv::{
    export_file_name, export_view, render_list, write_keyword_ideas, write_serp,
    write_top_keywords,
};
pub use types::{ExportError, ExportList, UnknownExportList};
