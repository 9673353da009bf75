//! Logger setup on top of `env_logger`.

use std::io::Write;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use colored::Colorize;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

const CRATE_TARGET: &str = "seo_insight";

/// HTTP plumbing crates, capped at `info` so request traces stay readable.
const HTTP_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util", "axum"];

/// Installs the process-wide logger.
///
/// `RUST_LOG` is read first, then `level` overrides it for this crate and as
/// the default. Colors follow `colored`'s terminal detection, so `NO_COLOR`
/// and redirected output get plain text.
///
/// ```bash
/// RUST_LOG=debug seo_insight search "coffee maker"
/// seo_insight --log-format json --log-level debug domain openai.com
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` when a logger is already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in HTTP_MODULES {
        builder.filter_module(module, level.min(LevelFilter::Info));
    }
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let message = record.args().to_string();
            writeln!(buf, "{}", json_line(Utc::now(), record.level(), record.target(), &message))
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let clock = Local::now().format("%H:%M:%S").to_string();
            writeln!(
                buf,
                "{}",
                plain_line(&clock, record.level(), record.target(), &record.args().to_string())
            )
        }),
    };

    builder.try_init().map_err(InitializationError::from)
}

/// Drops the crate prefix from a log target (`seo_insight::dispatcher::gemini`
/// becomes `dispatcher::gemini`).
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_TARGET)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

fn json_line(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "time": at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": level.as_str(),
        "module": short_target(target),
        "message": message,
    })
    .to_string()
}

fn plain_line(clock: &str, level: Level, target: &str, message: &str) -> String {
    let label = format!("{:<5}", level.as_str());
    let label = match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    };
    format!(
        "{} {} {} {}",
        clock.dimmed(),
        label,
        short_target(target).cyan(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn plain(text: String) -> String {
        regex::Regex::new("\x1b\\[[0-9;]*m")
            .unwrap()
            .replace_all(&text, "")
            .into_owned()
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("seo_insight::dispatcher::gemini"), "dispatcher::gemini");
        assert_eq!(short_target("seo_insight"), "seo_insight");
        assert_eq!(short_target("seo_insightful::x"), "seo_insightful::x");
        assert_eq!(short_target("reqwest::connect"), "reqwest::connect");
    }

    #[test]
    fn test_json_line() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let line = json_line(at, Level::Warn, "seo_insight::coordinator", "say \"hi\"");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["time"], "2024-03-01T12:30:05.000Z");
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["module"], "coordinator");
        assert_eq!(value["message"], "say \"hi\"");
    }

    #[test]
    fn test_plain_line() {
        let line = plain(plain_line("09:15:00", Level::Info, "seo_insight::dashboard", "listening"));
        assert_eq!(line, "09:15:00 INFO  dashboard listening");
    }

    #[test]
    fn test_init_logger_installs_once() {
        // The only test in this binary that installs a logger.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(first.is_ok());
        assert!(second.is_err());
    }
}
