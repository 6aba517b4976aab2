use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file when none is configured.
pub const LOG_ENV_VAR: &str = "CLICK_COUNTER_LOG";

/// Initialize tracing with file output.
///
/// Logging is disabled unless a log file is configured (`--log-file`,
/// `logging.file`, or `CLICK_COUNTER_LOG`): stdout belongs to the TUI.
/// Returns the file actually written to.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let base = resolve_log_path(config, std::env::var(LOG_ENV_VAR).ok())?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Failed to install log subscriber: {}", err);
        return None;
    }

    Some(path)
}

/// Configured file wins over the environment variable. Empty values count
/// as unset.
pub fn resolve_log_path(config: &LoggingConfig, env_value: Option<String>) -> Option<PathBuf> {
    config
        .file
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env_value.filter(|value| !value.is_empty()).map(PathBuf::from))
}

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_and_no_env_disables_logging() {
        assert_eq!(resolve_log_path(&LoggingConfig::default(), None), None);
    }

    #[test]
    fn env_used_when_config_has_no_file() {
        let path = resolve_log_path(&LoggingConfig::default(), Some("/tmp/cc.log".into()));
        assert_eq!(path, Some(PathBuf::from("/tmp/cc.log")));
    }

    #[test]
    fn config_file_wins_over_env() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/var/log/cc.log")),
            ..LoggingConfig::default()
        };
        let path = resolve_log_path(&config, Some("/tmp/cc.log".into()));
        assert_eq!(path, Some(PathBuf::from("/var/log/cc.log")));
    }

    #[test]
    fn empty_env_is_ignored() {
        assert_eq!(resolve_log_path(&LoggingConfig::default(), Some(String::new())), None);
    }

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(Path::new("/tmp/cc.log"), 1700000000, 42);
        assert_eq!(path, PathBuf::from("/tmp/cc.log.1700000000.42"));
    }
}
