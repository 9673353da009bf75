//! Terminal rendering of view state.
//!
//! Every function returns the rendered text so callers decide where it goes;
//! colors follow `colored`'s global override (disabled when stdout is not a
//! terminal or `NO_COLOR` is set).

use colored::{ColoredString, Colorize};

use crate::config::STARTER_QUERIES;
use crate::coordinator::ViewState;
use crate::models::{
    AnalysisMode, DomainAnalysis, Intent, KeywordAnalysis, KeywordIdea, Region, SearchHistory,
};

const KEYWORD_WIDTH: usize = 40;
const TITLE_WIDTH: usize = 44;
const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Formats a count with thousands separators.
pub(crate) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Pads or truncates `text` to exactly `width` characters.
/// A zero width leaves the text untouched.
fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        text.to_string()
    } else if text.chars().count() > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text:<width$}")
    }
}

/// One block character per sample, scaled between the series min and max.
pub fn sparkline(samples: &[f64]) -> String {
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    let (Some(min), Some(max)) = (
        finite.iter().copied().reduce(f64::min),
        finite.iter().copied().reduce(f64::max),
    ) else {
        return String::new();
    };
    let span = max - min;
    finite
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((v - min) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}

fn intent_cell(intent: Option<Intent>, width: usize) -> ColoredString {
    let text = fit(intent.map(|i| i.as_str()).unwrap_or("-"), width);
    match intent {
        Some(Intent::Informational) => text.blue(),
        Some(Intent::Transactional) => text.magenta(),
        Some(Intent::Commercial) => text.yellow(),
        Some(Intent::Navigational) => text.cyan(),
        None => text.dimmed(),
    }
}

fn difficulty_cell(difficulty: u8, width: usize) -> ColoredString {
    let text = format!("{difficulty:>width$}");
    match difficulty {
        0..=29 => text.green(),
        30..=59 => text.yellow(),
        _ => text.red(),
    }
}

fn heading(title: &str, subject: &str, region: Region) -> String {
    format!(
        "{} · {} · {} {}",
        title.bold(),
        subject.bold().underline(),
        region.flag(),
        region.name()
    )
}

fn metric(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {} {}", fit(label, 16).dimmed(), value)
}

fn idea_table(title: &str, ideas: &[KeywordIdea], lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push(format!("{} ({})", title.bold(), ideas.len()));
    if ideas.is_empty() {
        lines.push(format!("  {}", "No data".dimmed()));
        return;
    }
    lines.push(
        format!(
            "  {} {} {:>10} {:>4}",
            fit("Keyword", KEYWORD_WIDTH),
            fit("Intent", 14),
            "Volume",
            "KD"
        )
        .dimmed()
        .to_string(),
    );
    for idea in ideas {
        lines.push(format!(
            "  {} {} {:>10} {}",
            fit(&idea.keyword, KEYWORD_WIDTH),
            intent_cell(idea.intent, 14),
            format_count(idea.volume),
            difficulty_cell(idea.difficulty, 4)
        ));
    }
}

/// Renders a keyword overview.
pub fn render_keyword_analysis(analysis: &KeywordAnalysis, region: Region) -> String {
    let main = &analysis.main_keyword;
    let mut lines = vec![
        heading(
            AnalysisMode::KeywordOverview.title(),
            &main.keyword,
            region,
        ),
        metric("Volume", format_count(main.volume)),
        metric(
            "Difficulty",
            format!(
                "{} ({})",
                difficulty_cell(main.difficulty, 0),
                main.difficulty_label()
            ),
        ),
        metric("CPC", format!("${:.2}", main.cpc)),
        metric("Intent", intent_cell(Some(main.intent), 0)),
        metric("Trend", sparkline(&main.trend)),
    ];

    idea_table("Keyword Variations", &analysis.variations, &mut lines);
    idea_table("Questions", &analysis.questions, &mut lines);
    idea_table("Related Keywords", &analysis.related, &mut lines);

    lines.push(String::new());
    lines.push(format!("{} ({})", "SERP Analysis".bold(), analysis.serp.len()));
    if analysis.serp.is_empty() {
        lines.push(format!("  {}", "No data".dimmed()));
    } else {
        lines.push(
            format!(
                "  {:>3} {} {:>4} {:>10} {:>9}",
                "#",
                fit("Title / URL", TITLE_WIDTH),
                "AS",
                "Traffic",
                "Keywords"
            )
            .dimmed()
            .to_string(),
        );
        for row in &analysis.serp {
            lines.push(format!(
                "  {:>3} {} {:>4} {:>10} {:>9}",
                row.rank,
                fit(&row.title, TITLE_WIDTH),
                row.authority,
                format_count(row.traffic),
                format_count(row.keywords)
            ));
            lines.push(format!(
                "      {}",
                fit(&row.url, TITLE_WIDTH).dimmed()
            ));
        }
    }
    lines.join("\n")
}

/// Renders a domain overview.
pub fn render_domain_analysis(analysis: &DomainAnalysis, region: Region) -> String {
    let trend: Vec<f64> = analysis.traffic_trend.iter().map(|p| p.value).collect();
    let span = match (analysis.traffic_trend.first(), analysis.traffic_trend.last()) {
        (Some(first), Some(last)) => format!("  {} - {}", first.month, last.month)
            .dimmed()
            .to_string(),
        _ => String::new(),
    };
    let mut lines = vec![
        heading(
            AnalysisMode::DomainOverview.title(),
            &analysis.domain,
            region,
        ),
        metric("Authority Score", analysis.authority_score),
        metric("Organic Traffic", format_count(analysis.organic_traffic)),
        metric("Backlinks", format_count(analysis.backlinks)),
        metric("Display Ads", format_count(analysis.display_ads)),
        metric("Traffic Trend", format!("{}{}", sparkline(&trend), span)),
    ];

    lines.push(String::new());
    lines.push(format!(
        "{} ({})",
        "Top Organic Keywords".bold(),
        analysis.top_keywords.len()
    ));
    lines.push(
        format!(
            "  {} {:>4} {:>10} {:>10}",
            fit("Keyword", KEYWORD_WIDTH),
            "Pos",
            "Volume",
            "Traffic"
        )
        .dimmed()
        .to_string(),
    );
    for row in &analysis.top_keywords {
        lines.push(format!(
            "  {} {:>4} {:>10} {:>10}",
            fit(&row.keyword, KEYWORD_WIDTH),
            row.position,
            format_count(row.volume),
            format_count(row.traffic)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} ({})",
        "Main Competitors".bold(),
        analysis.main_competitors.len()
    ));
    for competitor in &analysis.main_competitors {
        lines.push(format!(
            "  {} {:>10} common keywords {:>12} traffic",
            fit(&competitor.domain, 32),
            format_count(competitor.common_keywords),
            format_count(competitor.traffic)
        ));
    }
    lines.join("\n")
}

/// Renders the region table, marking `selected`.
pub fn render_regions(selected: Region) -> String {
    Region::table()
        .iter()
        .map(|info| {
            let line = format!("{} {}  {}", info.flag, info.code, info.name);
            if info.code == selected.code() {
                format!("{} {}", "*".green(), line.bold())
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders recent searches, most recent first.
pub fn render_history(history: &SearchHistory) -> String {
    if history.is_empty() {
        let mut lines = vec!["No recent searches. Try one of these:".dimmed().to_string()];
        lines.extend(STARTER_QUERIES.iter().map(|q| format!("  Try \"{q}\"")));
        return lines.join("\n");
    }
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>2}. {} {}",
                i + 1,
                entry.query,
                format!("({})", entry.mode).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders what the view currently shows.
///
/// An error is a banner above the last good result, which stays visible.
pub fn render_view(view: &ViewState) -> String {
    let mut sections = Vec::new();
    if let Some(error) = &view.error {
        sections.push(format!("{} {}", "Error:".red().bold(), error));
    }
    if let Some(analysis) = &view.keyword_result {
        sections.push(render_keyword_analysis(analysis, view.region));
    } else if let Some(analysis) = &view.domain_result {
        sections.push(render_domain_analysis(analysis, view.region));
    } else if view.error.is_none() {
        sections.push("Enter a keyword or a domain to analyze".dimmed().to_string());
        sections.push(render_history(&view.history));
    }
    sections.join("\n\n")
}
