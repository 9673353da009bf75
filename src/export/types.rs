//! Export types.

use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;
use thiserror::Error;

/// A table that can be exported from the current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ExportList {
    Variations,
    Questions,
    Related,
    Serp,
    TopKeywords,
}

impl ExportList {
    /// Identifier used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportList::Variations => "variations",
            ExportList::Questions => "questions",
            ExportList::Related => "related",
            ExportList::Serp => "serp",
            ExportList::TopKeywords => "top-keywords",
        }
    }

    /// Table heading as shown in the dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            ExportList::Variations => "Keyword Variations",
            ExportList::Questions => "Questions",
            ExportList::Related => "Related Keywords",
            ExportList::Serp => "SERP Analysis",
            ExportList::TopKeywords => "Top Organic Keywords",
        }
    }
}

impl fmt::Display for ExportList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown export list {0:?}; expected variations, questions, related, serp or top-keywords")]
pub struct UnknownExportList(pub String);

impl FromStr for ExportList {
    type Err = UnknownExportList;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "variations" => Ok(ExportList::Variations),
            "questions" => Ok(ExportList::Questions),
            "related" => Ok(ExportList::Related),
            "serp" => Ok(ExportList::Serp),
            "top-keywords" => Ok(ExportList::TopKeywords),
            _ => Err(UnknownExportList(s.to_string())),
        }
    }
}

/// Errors produced while exporting.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The current view holds no result containing this list.
    #[error("No current result contains the {0} list")]
    NotAvailable(ExportList),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
