//! Application state coordinator.
//!
//! Owns the single view state, routes queries to the dispatcher, commits
//! results or errors and keeps the recent-search history.
//!
//! Every submission takes a ticket from a monotonically increasing sequence.
//! When a response arrives and its ticket is no longer the latest one issued,
//! the response is dropped without touching the view, so a slow superseded
//! request can never overwrite a fresher result.

mod state;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::config::FALLBACK_ERROR_MESSAGE;
use crate::dispatcher::{dispatch, resolve_mode, AnalysisBackend, AnalysisResult};
use crate::error_handling::SearchStats;
use crate::models::{AnalysisMode, Region, SearchHistory, SearchHistoryEntry};

pub use state::{SubmitOutcome, ViewState, ViewTab};

struct Inner {
    view: ViewState,
    latest_ticket: u64,
}

/// Serializes searches into one coherent view.
pub struct StateCoordinator {
    backend: Arc<dyn AnalysisBackend>,
    inner: Mutex<Inner>,
    stats: Arc<SearchStats>,
}

/// Message shown for a failed search.
pub fn user_message(error: &dyn std::error::Error) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

impl StateCoordinator {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self::with_region(backend, Region::default())
    }

    /// Creates a coordinator whose region selector starts at `region`.
    pub fn with_region(backend: Arc<dyn AnalysisBackend>, region: Region) -> Self {
        Self::with_history(backend, region, SearchHistory::default())
    }

    pub fn with_history(
        backend: Arc<dyn AnalysisBackend>,
        region: Region,
        history: SearchHistory,
    ) -> Self {
        let view = ViewState {
            region,
            history,
            ..ViewState::default()
        };
        Self {
            backend,
            inner: Mutex::new(Inner {
                view,
                latest_ticket: 0,
            }),
            stats: Arc::new(SearchStats::new()),
        }
    }

    pub fn stats(&self) -> Arc<SearchStats> {
        Arc::clone(&self.stats)
    }

    /// Clone of the current view.
    pub async fn snapshot(&self) -> ViewState {
        self.inner.lock().await.view.clone()
    }

    /// Runs one search and commits its outcome.
    ///
    /// A blank query is ignored without any state change. Otherwise the view
    /// enters the loading state with the target tab selected before the
    /// backend is called, and leaves it once this submission settles (unless
    /// a newer submission is still in flight).
    pub async fn submit_search(
        &self,
        query: &str,
        region: Region,
        forced_mode: Option<AnalysisMode>,
    ) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank search");
            return SubmitOutcome::Ignored;
        }

        let mode = resolve_mode(query, forced_mode);
        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.latest_ticket += 1;
            let view = &mut inner.view;
            view.loading = true;
            view.error = None;
            view.region_picker_open = false;
            view.active_tab = mode.into();
            inner.latest_ticket
        };
        info!("Search #{ticket}: {query:?} as {mode} in {region}");

        let result = dispatch(self.backend.as_ref(), mode, query, region).await;

        let mut inner = self.inner.lock().await;
        if inner.latest_ticket != ticket {
            debug!(
                "Discarding response to search #{ticket}; #{} is newer",
                inner.latest_ticket
            );
            self.stats.record_superseded();
            return SubmitOutcome::Superseded { mode };
        }

        let view = &mut inner.view;
        let outcome = match result {
            Ok(result) => {
                match result {
                    AnalysisResult::KeywordOverview(analysis) => {
                        view.keyword_result = Some(analysis);
                        view.domain_result = None;
                    }
                    AnalysisResult::DomainOverview(analysis) => {
                        view.domain_result = Some(analysis);
                        view.keyword_result = None;
                    }
                }
                view.history.push(SearchHistoryEntry::new(query, mode));
                view.query_text = query.to_string();
                self.stats.record_success(mode);
                SubmitOutcome::Completed { mode }
            }
            Err(err) => {
                self.stats.increment_error(err.error_type());
                let message = user_message(&err);
                warn!("Search #{ticket} failed: {message}");
                view.error = Some(message.clone());
                SubmitOutcome::Failed { mode, message }
            }
        };
        view.loading = false;
        outcome
    }

    /// Searches in the currently selected region.
    pub async fn search(&self, query: &str, forced_mode: Option<AnalysisMode>) -> SubmitOutcome {
        let region = self.inner.lock().await.view.region;
        self.submit_search(query, region, forced_mode).await
    }

    /// Follows a keyword clicked inside a result table.
    ///
    /// Always runs a keyword overview, even for dotted text like `node.js`.
    pub async fn drill_down(&self, keyword: &str) -> SubmitOutcome {
        self.search(keyword, Some(AnalysisMode::KeywordOverview))
            .await
    }

    /// Replays a history entry in the mode it originally ran in.
    ///
    /// Returns `None` when `index` is out of range.
    pub async fn rerun_history(&self, index: usize) -> Option<SubmitOutcome> {
        let (entry, region) = {
            let inner = self.inner.lock().await;
            (inner.view.history.get(index).cloned()?, inner.view.region)
        };
        Some(
            self.submit_search(&entry.query, region, Some(entry.mode))
                .await,
        )
    }

    pub async fn select_region(&self, region: Region) {
        let mut inner = self.inner.lock().await;
        inner.view.region = region;
        inner.view.region_picker_open = false;
    }

    /// Opens or closes the region picker, returning the new state.
    pub async fn toggle_region_picker(&self) -> bool {
        let mut inner = self.inner.lock().await;
        inner.view.region_picker_open = !inner.view.region_picker_open;
        inner.view.region_picker_open
    }

    pub async fn set_query_text(&self, text: &str) {
        self.inner.lock().await.view.query_text = text.to_string();
    }

    /// Switches tabs; the dashboard tab drops both results.
    pub async fn set_active_tab(&self, tab: ViewTab) {
        let mut inner = self.inner.lock().await;
        inner.view.active_tab = tab;
        if tab == ViewTab::Dashboard {
            inner.view.keyword_result = None;
            inner.view.domain_result = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::AnalysisError;
    use crate::models::{DomainAnalysis, Intent, KeywordAnalysis, KeywordMetric};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Backend that records calls and answers from a script.
    #[derive(Default)]
    struct ScriptedBackend {
        calls: StdMutex<Vec<(AnalysisMode, String, Region)>>,
        fail_with: StdMutex<Option<String>>,
    }

    fn keyword_analysis(keyword: &str) -> KeywordAnalysis {
        KeywordAnalysis {
            main_keyword: KeywordMetric {
                keyword: keyword.to_string(),
                volume: 100,
                difficulty: 20,
                cpc: 0.5,
                intent: Intent::Informational,
                trend: vec![1.0; 12],
            },
            variations: vec![],
            questions: vec![],
            related: vec![],
            serp: vec![],
        }
    }

    fn domain_analysis(domain: &str) -> DomainAnalysis {
        DomainAnalysis {
            domain: domain.to_string(),
            authority_score: 50,
            organic_traffic: 1000,
            backlinks: 10,
            display_ads: 0,
            traffic_trend: vec![],
            top_keywords: vec![],
            main_competitors: vec![],
        }
    }

    #[async_trait]
    impl AnalysisBackend for ScriptedBackend {
        async fn analyze_keyword(
            &self,
            keyword: &str,
            region: Region,
        ) -> Result<KeywordAnalysis, AnalysisError> {
            self.calls.lock().unwrap().push((
                AnalysisMode::KeywordOverview,
                keyword.to_string(),
                region,
            ));
            match self.fail_with.lock().unwrap().clone() {
                Some(message) => Err(AnalysisError::Status {
                    status: 500,
                    message,
                }),
                None => Ok(keyword_analysis(keyword)),
            }
        }

        async fn analyze_domain(
            &self,
            domain: &str,
            region: Region,
        ) -> Result<DomainAnalysis, AnalysisError> {
            self.calls.lock().unwrap().push((
                AnalysisMode::DomainOverview,
                domain.to_string(),
                region,
            ));
            match self.fail_with.lock().unwrap().clone() {
                Some(message) => Err(AnalysisError::Status {
                    status: 500,
                    message,
                }),
                None => Ok(domain_analysis(domain)),
            }
        }
    }

    fn coordinator() -> (Arc<ScriptedBackend>, StateCoordinator) {
        let backend = Arc::new(ScriptedBackend::default());
        let coordinator = StateCoordinator::new(backend.clone());
        (backend, coordinator)
    }

    #[tokio::test]
    async fn test_blank_query_is_a_no_op() {
        let (backend, coordinator) = coordinator();
        coordinator.toggle_region_picker().await;
        let before = coordinator.snapshot().await;

        assert_eq!(
            coordinator.submit_search("   ", Region::Us, None).await,
            SubmitOutcome::Ignored
        );

        assert_eq!(coordinator.snapshot().await, before);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_keyword_success_commits_and_clears_domain_slot() {
        let (backend, coordinator) = coordinator();
        coordinator
            .submit_search("openai.com", Region::Us, None)
            .await;
        let outcome = coordinator
            .submit_search("best coffee maker", Region::Mx, None)
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                mode: AnalysisMode::KeywordOverview
            }
        );
        let view = coordinator.snapshot().await;
        assert!(view.keyword_result.is_some());
        assert!(view.domain_result.is_none());
        assert_eq!(view.active_tab, ViewTab::KeywordOverview);
        assert_eq!(view.query_text, "best coffee maker");
        assert!(!view.loading);
        assert_eq!(
            backend.calls.lock().unwrap().last().cloned(),
            Some((
                AnalysisMode::KeywordOverview,
                "best coffee maker".to_string(),
                Region::Mx
            ))
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result_and_sets_error() {
        let (backend, coordinator) = coordinator();
        coordinator.submit_search("seo", Region::Us, None).await;
        *backend.fail_with.lock().unwrap() = Some("quota exhausted".to_string());

        let outcome = coordinator.submit_search("apple.com", Region::Us, None).await;

        let view = coordinator.snapshot().await;
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert!(view.error.as_deref().unwrap().contains("quota exhausted"));
        assert!(view.keyword_result.is_some());
        assert!(view.domain_result.is_none());
        assert_eq!(view.active_tab, ViewTab::DomainOverview);
        assert!(!view.loading);
        assert_eq!(view.history.queries(), ["seo"]);
    }

    #[tokio::test]
    async fn test_next_submission_clears_error() {
        let (backend, coordinator) = coordinator();
        *backend.fail_with.lock().unwrap() = Some("boom".to_string());
        coordinator.submit_search("seo", Region::Us, None).await;
        *backend.fail_with.lock().unwrap() = None;
        coordinator.submit_search("seo", Region::Us, None).await;
        assert_eq!(coordinator.snapshot().await.error, None);
    }

    #[tokio::test]
    async fn test_drill_down_forces_keyword_mode() {
        let (backend, coordinator) = coordinator();
        coordinator.select_region(Region::Co).await;
        coordinator.drill_down("node.js").await;

        let calls = backend.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![(
                AnalysisMode::KeywordOverview,
                "node.js".to_string(),
                Region::Co
            )]
        );
    }

    #[tokio::test]
    async fn test_rerun_history_keeps_recorded_mode() {
        let (backend, coordinator) = coordinator();
        coordinator
            .submit_search("vue.js", Region::Us, Some(AnalysisMode::KeywordOverview))
            .await;
        coordinator.submit_search("seo", Region::Us, None).await;

        let outcome = coordinator.rerun_history(1).await;
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Completed {
                mode: AnalysisMode::KeywordOverview
            })
        );
        assert_eq!(
            backend.calls.lock().unwrap().last().unwrap().0,
            AnalysisMode::KeywordOverview
        );
        assert_eq!(coordinator.snapshot().await.history.queries(), ["vue.js", "seo"]);
        assert_eq!(coordinator.rerun_history(5).await, None);
    }

    #[tokio::test]
    async fn test_region_picker_closes_on_search_and_selection() {
        let (_, coordinator) = coordinator();
        assert!(coordinator.toggle_region_picker().await);
        coordinator.submit_search("seo", Region::Us, None).await;
        assert!(!coordinator.snapshot().await.region_picker_open);

        assert!(coordinator.toggle_region_picker().await);
        coordinator.select_region(Region::Uk).await;
        let view = coordinator.snapshot().await;
        assert!(!view.region_picker_open);
        assert_eq!(view.region, Region::Uk);
    }

    #[tokio::test]
    async fn test_dashboard_tab_clears_results() {
        let (_, coordinator) = coordinator();
        coordinator.submit_search("seo", Region::Us, None).await;
        coordinator.set_active_tab(ViewTab::DomainOverview).await;
        assert!(coordinator.snapshot().await.has_result());

        coordinator.set_active_tab(ViewTab::Dashboard).await;
        let view = coordinator.snapshot().await;
        assert!(!view.has_result());
        assert_eq!(view.history.len(), 1);
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        #[derive(Debug)]
        struct Silent;
        impl std::fmt::Display for Silent {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Ok(())
            }
        }
        impl std::error::Error for Silent {}

        assert_eq!(user_message(&Silent), "Error processing request.");
        assert_eq!(
            user_message(&AnalysisError::EmptyResponse),
            "Generative backend returned an empty response"
        );
    }
}
