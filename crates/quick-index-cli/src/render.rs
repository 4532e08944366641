//! Plain-text formatting shared by the console and the commands

use quick_index_core::{AppError, Config, SearchResult};

/// One-line summary of a search hit.
pub fn result_summary(result: &SearchResult) -> String {
    format!("Value {} found at index {}", result.value, result.index)
}

/// Error heading, with the HTTP status when the server supplied one.
pub fn error_heading(error: &AppError) -> String {
    match error.status {
        Some(status) => format!("{} ({})", error.kind.title(), status),
        None => error.kind.title().to_string(),
    }
}

pub fn history_line(position: usize, value: i64) -> String {
    format!("{:>2}. {}", position + 1, value)
}

/// Key/value rows for `config show`.
pub fn config_rows(config: &Config) -> Vec<(&'static str, String)> {
    let optional = |value: Option<String>| value.unwrap_or_else(|| "not set".to_string());

    vec![
        ("Base URL", config.client.base_url.clone()),
        (
            "Default tolerance",
            optional(config.client.default_tolerance.map(|t| t.to_string())),
        ),
        (
            "Connect timeout",
            optional(config.client.network.connect_timeout_secs.map(|s| format!("{s}s"))),
        ),
        (
            "Request timeout",
            optional(config.client.network.request_timeout_secs.map(|s| format!("{s}s"))),
        ),
        ("Log level", config.logging.level.clone()),
        ("Log format", config.logging.format.to_string()),
        (
            "History file",
            optional(
                config
                    .storage
                    .resolved_history_file()
                    .map(|p| p.display().to_string()),
            ),
        ),
        ("History limit", config.storage.history_limit.to_string()),
    ]
}
