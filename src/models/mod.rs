//! Data contracts shared by the dispatcher, the coordinator and renderers.
//!
//! Every analysis record is produced by the generative backend and is treated
//! as an immutable value. Only [`SearchHistory`] is mutated locally.

mod domain;
mod history;
mod intent;
mod keyword;
pub(crate) mod lenient;
mod mode;
mod region;

pub use domain::{Competitor, DomainAnalysis, TopKeyword, TrafficPoint};
pub use history::{SearchHistory, SearchHistoryEntry};
pub use intent::{Intent, UnknownIntent};
pub use keyword::{KeywordAnalysis, KeywordIdea, KeywordMetric, SerpResult};
pub use mode::{AnalysisMode, UnknownMode};
pub use region::{Region, RegionInfo, UnknownRegion};
