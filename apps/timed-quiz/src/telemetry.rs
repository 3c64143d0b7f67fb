//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs go to a file. `TIMED_QUIZ_LOG`
//! overrides the configured filter (e.g. `"timed_quiz=debug"`).

use crate::config::Config;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TIMED_QUIZ_LOG";

/// Install the global subscriber. Returns the log file in use, or `None` if
/// logging could not be set up.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("logs").join("quiz.log");
        let mut config = Config::default();
        config.logging.file = Some(file.clone());

        assert_eq!(init_tracing(&config), Some(file.clone()));
        assert!(file.exists());
    }
}
