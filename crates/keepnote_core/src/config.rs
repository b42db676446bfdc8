//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve logging level and directory from explicit values, environment,
//!   then build-mode defaults.
//!
//! # Invariants
//! - Explicit (non-blank) values always win over environment values.
//! - Resolution never fails; validation happens in `logging::init_logging`.

use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "KEEPNOTE_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "KEEPNOTE_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "keepnote-logs";

/// Logging settings handed to `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error` (validated at init).
    pub level: String,
    /// Absolute directory for rolling log files (validated at init).
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Resolves settings: explicit value, then environment, then default.
    pub fn resolve(level: Option<&str>, log_dir: Option<&Path>) -> Self {
        Self::resolve_with(level, log_dir, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        level: Option<&str>,
        log_dir: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let level = non_blank(level.map(str::to_string))
            .or_else(|| non_blank(lookup(LOG_LEVEL_ENV)))
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = log_dir
            .filter(|path| !path.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from))
            .unwrap_or_else(default_log_dir);

        Self { level, log_dir }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(default_log_level(), default_log_dir())
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Default log directory under the system temp dir.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
