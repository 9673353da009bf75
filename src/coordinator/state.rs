//! View state owned by the coordinator.

use serde::{Deserialize, Serialize};

use crate::models::{AnalysisMode, DomainAnalysis, KeywordAnalysis, Region, SearchHistory};

/// Section of the dashboard currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewTab {
    /// Landing view; selecting it drops any current result
    Dashboard,
    #[default]
    KeywordOverview,
    DomainOverview,
}

impl From<AnalysisMode> for ViewTab {
    fn from(mode: AnalysisMode) -> Self {
        match mode {
            AnalysisMode::KeywordOverview => ViewTab::KeywordOverview,
            AnalysisMode::DomainOverview => ViewTab::DomainOverview,
        }
    }
}

/// Everything a renderer needs, as of one instant.
///
/// Renderers receive clones via [`StateCoordinator::snapshot`]; the live
/// value is only mutated through coordinator operations.
///
/// [`StateCoordinator::snapshot`]: super::StateCoordinator::snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_tab: ViewTab,
    /// Text shown in the search box
    pub query_text: String,
    pub region: Region,
    pub region_picker_open: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub keyword_result: Option<KeywordAnalysis>,
    pub domain_result: Option<DomainAnalysis>,
    pub history: SearchHistory,
}

impl ViewState {
    pub fn has_result(&self) -> bool {
        self.keyword_result.is_some() || self.domain_result.is_some()
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum SubmitOutcome {
    /// Query was blank; nothing happened.
    Ignored,
    /// Result committed to the view.
    Completed { mode: AnalysisMode },
    /// Error message committed to the view.
    Failed { mode: AnalysisMode, message: String },
    /// A newer submission was issued while this one was in flight; its
    /// response was discarded.
    Superseded { mode: AnalysisMode },
}
