//! Configuration for the timed quiz.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| Self::from_toml(&s))
            .unwrap_or_default()
    }

    pub fn from_toml(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "timed-quiz")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Log file path: configured, or in the data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "timed-quiz")
                .map(|d| d.data_dir().join("timed-quiz.log"))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Countdown length in seconds.
    #[serde(default = "default_duration")]
    pub duration_secs: u32,
    /// TOML question bank; the built-in bank is used when unset.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

fn default_duration() -> u32 { 300 }

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            duration_secs: 300,
            questions_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_question_numbers: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

fn default_true() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_question_numbers: true,
            show_key_hints: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"timed_quiz=debug"`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.quiz.duration_secs, 300);
        assert!(config.quiz.questions_file.is_none());
        assert!(config.display.show_question_numbers);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
[quiz]
duration_secs = 90
questions_file = "/tmp/bank.toml"

[display]
show_key_hints = false
"#,
        )
        .unwrap();

        assert_eq!(config.quiz.duration_secs, 90);
        assert_eq!(config.quiz.questions_file, Some(PathBuf::from("/tmp/bank.toml")));
        assert!(config.display.show_question_numbers);
        assert!(!config.display.show_key_hints);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.quiz.duration_secs, 300);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("[quiz]\nduration_secs = \"soon\"").is_none());
    }

    #[test]
    fn test_roundtrip_keeps_duration() {
        let mut config = Config::default();
        config.quiz.duration_secs = 42;
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap().quiz.duration_secs, 42);
    }

    #[test]
    fn test_log_path_override() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/tmp/quiz.log"));
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/quiz.log")));
    }
}
