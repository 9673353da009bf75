//! Region-aware instructions for the two analysis contracts.

use crate::config::{SERP_DEPTH, TREND_MONTHS};
use crate::models::Region;

/// Instruction for a keyword overview.
pub fn keyword_prompt(keyword: &str, region: Region) -> String {
    format!(
        "Analyze keyword \"{keyword}\" specifically for the {name} ({code}) market. \
         Provide current metrics including monthly search volume, keyword difficulty (0-100), \
         cost per click and search intent (Informational, Navigational, Commercial or Transactional), \
         a {TREND_MONTHS}-month search volume trend, keyword variations, question keywords, \
         related keywords, and the top {SERP_DEPTH} organic SERP results with their authority score, \
         estimated traffic and ranking keyword count. Use real-world search data for this region.",
        name = region.name(),
        code = region.code(),
    )
}

/// Instruction for a domain overview.
pub fn domain_prompt(domain: &str, region: Region) -> String {
    format!(
        "Perform a detailed Domain Overview analysis for \"{domain}\" in the {name} ({code}) market. \
         Provide Authority Score (0-100), estimated monthly organic traffic for this region, \
         estimated backlinks, display ads count, a monthly organic traffic trend, \
         top organic keywords (pos 1-10), and main competitors in the same country. \
         Use real-world search data.",
        name = region.name(),
        code = region.code(),
    )
}
