//! CSV export functionality.
//!
//! One row per table entry, with the same column headings the dashboard
//! shows.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use csv::Writer;
use log::info;
use regex::Regex;
use strum::IntoEnumIterator;

use super::types::{ExportError, ExportList};
use crate::coordinator::ViewState;
use crate::models::{KeywordIdea, SerpResult, TopKeyword};

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Writes keyword ideas as `Keyword,Intent,Volume,Difficulty`.
///
/// An unrecognised intent is written as an empty cell.
///
/// # Returns
///
/// The number of data rows written.
pub fn write_keyword_ideas<W: Write>(out: W, ideas: &[KeywordIdea]) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["Keyword", "Intent", "Volume", "Difficulty"])?;
    for idea in ideas {
        writer.write_record([
            idea.keyword.clone(),
            idea.intent.map(|i| i.to_string()).unwrap_or_default(),
            idea.volume.to_string(),
            idea.difficulty.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(ideas.len())
}

/// Writes SERP rows as `Rank,Title,URL,Authority Score,Traffic,Keywords`.
pub fn write_serp<W: Write>(out: W, rows: &[SerpResult]) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "Rank",
        "Title",
        "URL",
        "Authority Score",
        "Traffic",
        "Keywords",
    ])?;
    for row in rows {
        writer.write_record([
            row.rank.to_string(),
            row.title.clone(),
            row.url.clone(),
            row.authority.to_string(),
            row.traffic.to_string(),
            row.keywords.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Writes domain keywords as `Keyword,Position,Volume,Traffic`.
pub fn write_top_keywords<W: Write>(out: W, rows: &[TopKeyword]) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["Keyword", "Position", "Volume", "Traffic"])?;
    for row in rows {
        writer.write_record([
            row.keyword.clone(),
            row.position.to_string(),
            row.volume.to_string(),
            row.traffic.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// File name used when `list` is saved from `view`.
///
/// Keyword tables are named after their heading (`keyword_variations_export.csv`);
/// the domain table is named after the analyzed domain (`apple.com_keywords.csv`).
pub fn export_file_name(list: ExportList, view: &ViewState) -> String {
    match (list, &view.domain_result) {
        (ExportList::TopKeywords, Some(domain)) => {
            let domain: String = domain
                .domain
                .chars()
                .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
                .collect();
            format!("{domain}_keywords.csv")
        }
        _ => {
            let title = list.title().to_lowercase();
            let slug = match WHITESPACE.as_ref() {
                Some(re) => re.replace_all(&title, "_").into_owned(),
                None => title.split_whitespace().collect::<Vec<_>>().join("_"),
            };
            format!("{slug}_export.csv")
        }
    }
}

/// Renders one table of the current result to CSV bytes.
///
/// # Errors
///
/// Returns [`ExportError::NotAvailable`] when the view holds no result with
/// that table.
pub fn render_list(list: ExportList, view: &ViewState) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    match (list, &view.keyword_result, &view.domain_result) {
        (ExportList::Variations, Some(k), _) => write_keyword_ideas(&mut buffer, &k.variations)?,
        (ExportList::Questions, Some(k), _) => write_keyword_ideas(&mut buffer, &k.questions)?,
        (ExportList::Related, Some(k), _) => write_keyword_ideas(&mut buffer, &k.related)?,
        (ExportList::Serp, Some(k), _) => write_serp(&mut buffer, &k.serp)?,
        (ExportList::TopKeywords, _, Some(d)) => write_top_keywords(&mut buffer, &d.top_keywords)?,
        _ => return Err(ExportError::NotAvailable(list)),
    };
    Ok(buffer)
}

/// Writes every table of the current result into `dir`.
///
/// # Returns
///
/// Paths of the files written; empty when the view holds no result.
pub fn export_view(dir: &Path, view: &ViewState) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for list in ExportList::iter() {
        let bytes = match render_list(list, view) {
            Ok(bytes) => bytes,
            Err(ExportError::NotAvailable(_)) => continue,
            Err(e) => return Err(e),
        };
        let path = dir.join(export_file_name(list, view));
        std::fs::write(&path, bytes)?;
        info!("Exported {} to {}", list, path.display());
        written.push(path);
    }
    Ok(written)
}
