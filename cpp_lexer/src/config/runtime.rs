// RUNTIME PREFERENCES (User Experience)

use super::compile_time::logging::DEFAULT_MIN_LOG_LEVEL;
use super::compile_time::source::DEFAULT_SOURCE_PATH;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePreferences {
    /// Path of the source snippet to classify
    pub source_path: String,

    /// Whether to log file metadata after reading
    pub enable_performance_logging: bool,
}

impl Default for SourcePreferences {
    fn default() -> Self {
        Self {
            source_path: env::var(env_vars::SOURCE_PATH)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_PATH.to_string()),
            enable_performance_logging: env::var(env_vars::ENABLE_PERFORMANCE_LOGGING)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Output format of the final summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPreferences {
    /// Whether to print `<token> is <label>` for every classified token
    pub emit_trace: bool,

    /// Whether to print the running-summary block after every classified token
    pub emit_running_summary: bool,

    /// Format of the final summary
    pub format: ReportFormat,
}

impl ReportPreferences {
    /// Final summary only
    pub fn quiet() -> Self {
        Self {
            emit_trace: false,
            emit_running_summary: false,
            format: ReportFormat::Text,
        }
    }
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            emit_trace: env::var(env_vars::EMIT_TRACE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            emit_running_summary: env::var(env_vars::EMIT_RUNNING_SUMMARY)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            format: env::var(env_vars::REPORT_FORMAT)
                .ok()
                .and_then(|v| parse_report_format(&v))
                .unwrap_or(ReportFormat::Text),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable diagnostic output on stderr (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or_else(|| LogLevel::from_u8(DEFAULT_MIN_LOG_LEVEL)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Levels above 3 clamp to Debug
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

fn parse_report_format(format: &str) -> Option<ReportFormat> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub source: SourcePreferences,
    pub report: ReportPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load preferences from the environment, letting an explicit path win
    pub fn load(source_path_override: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = source_path_override {
            config.source.source_path = path;
        }
        config
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Source
    pub const SOURCE_PATH: &str = "CPP_LEXER_SOURCE_PATH";
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "CPP_LEXER_ENABLE_PERFORMANCE_LOGGING";

    // Report
    pub const EMIT_TRACE: &str = "CPP_LEXER_EMIT_TRACE";
    pub const EMIT_RUNNING_SUMMARY: &str = "CPP_LEXER_EMIT_RUNNING_SUMMARY";
    pub const REPORT_FORMAT: &str = "CPP_LEXER_REPORT_FORMAT";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "CPP_LEXER_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "CPP_LEXER_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "CPP_LEXER_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!(parse_report_format("json"), Some(ReportFormat::Json));
        assert_eq!(parse_report_format("JSON"), Some(ReportFormat::Json));
        assert_eq!(parse_report_format("text"), Some(ReportFormat::Text));
        assert_eq!(parse_report_format("xml"), None);
    }

    #[test]
    fn test_log_level_from_u8_clamps() {
        assert_eq!(LogLevel::from_u8(0), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(2), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(9), LogLevel::Debug);
    }

    #[test]
    fn test_override_wins_over_environment() {
        let config = RuntimeConfig::load(Some("snippet.cpp".to_string()));
        assert_eq!(config.source.source_path, "snippet.cpp");
    }

    #[test]
    fn test_quiet_report_preferences() {
        let prefs = ReportPreferences::quiet();
        assert!(!prefs.emit_trace);
        assert!(!prefs.emit_running_summary);
        assert_eq!(prefs.format, ReportFormat::Text);
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::SOURCE_PATH.starts_with("CPP_LEXER_"));
        assert!(env_vars::EMIT_TRACE.starts_with("CPP_LEXER_"));
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("CPP_LEXER_"));
    }
}
