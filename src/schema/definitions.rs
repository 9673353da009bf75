//! The two analysis contracts.

use std::sync::LazyLock;

use super::Schema;

static KEYWORD_ANALYSIS: LazyLock<Schema> = LazyLock::new(build_keyword_analysis);
static DOMAIN_ANALYSIS: LazyLock<Schema> = LazyLock::new(build_domain_analysis);

/// Schema of a keyword overview response.
pub fn keyword_analysis_schema() -> &'static Schema {
    &KEYWORD_ANALYSIS
}

/// Schema of a domain overview response.
pub fn domain_analysis_schema() -> &'static Schema {
    &DOMAIN_ANALYSIS
}

fn keyword_idea() -> Schema {
    Schema::object(
        vec![
            ("keyword", Schema::String),
            ("intent", Schema::String),
            ("volume", Schema::Number),
            ("difficulty", Schema::Number),
        ],
        &[],
    )
}

fn build_keyword_analysis() -> Schema {
    let main_keyword = Schema::object(
        vec![
            ("keyword", Schema::String),
            ("volume", Schema::Number),
            ("difficulty", Schema::Number),
            ("cpc", Schema::Number),
            ("intent", Schema::String),
            ("trend", Schema::array(Schema::Number)),
        ],
        &["keyword", "volume", "difficulty", "cpc", "intent", "trend"],
    );
    let serp_result = Schema::object(
        vec![
            ("rank", Schema::Number),
            ("title", Schema::String),
            ("url", Schema::String),
            ("as", Schema::Number),
            ("traffic", Schema::Number),
            ("keywords", Schema::Number),
        ],
        &[],
    );

    Schema::object(
        vec![
            ("mainKeyword", main_keyword),
            ("variations", Schema::array(keyword_idea())),
            ("questions", Schema::array(keyword_idea())),
            ("related", Schema::array(keyword_idea())),
            ("serp", Schema::array(serp_result)),
        ],
        &["mainKeyword", "variations", "questions", "related", "serp"],
    )
}

fn build_domain_analysis() -> Schema {
    let traffic_point = Schema::object(
        vec![("month", Schema::String), ("value", Schema::Number)],
        &[],
    );
    let top_keyword = Schema::object(
        vec![
            ("keyword", Schema::String),
            ("pos", Schema::Number),
            ("volume", Schema::Number),
            ("traffic", Schema::Number),
        ],
        &[],
    );
    let competitor = Schema::object(
        vec![
            ("domain", Schema::String),
            ("commonKeywords", Schema::Number),
            ("traffic", Schema::Number),
        ],
        &[],
    );

    Schema::object(
        vec![
            ("domain", Schema::String),
            ("authorityScore", Schema::Number),
            ("organicTraffic", Schema::Number),
            ("backlinks", Schema::Number),
            ("displayAds", Schema::Number),
            ("trafficTrend", Schema::array(traffic_point)),
            ("topKeywords", Schema::array(top_keyword)),
            ("mainCompetitors", Schema::array(competitor)),
        ],
        &[
            "domain",
            "authorityScore",
            "organicTraffic",
            "backlinks",
            "trafficTrend",
            "topKeywords",
            "mainCompetitors",
        ],
    )
}
