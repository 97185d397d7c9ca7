//! Settings values, their validation and config errors

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "quiz.rounds")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One numbered line per error
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VocabSettings {
    /// Words file. A relative path is resolved against the config
    /// directory.
    pub data_file: String,

    pub quiz: QuizConfig,
    pub logging: LoggingConfig,
}

impl Default for VocabSettings {
    fn default() -> Self {
        Self {
            data_file: "data/words.csv".to_string(),
            quiz: QuizConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizConfig {
    /// Questions per quiz.
    /// `None` asks every pair once.
    pub rounds: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// Directory for daily log files.
    /// `None` logs to stderr.
    pub directory: Option<String>,

    /// Default filter level, overridden by `VOCAB_LOG`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { directory: None, level: "warn".to_string() }
    }
}

impl VocabSettings {
    /// # Errors
    /// - `dataFile` is empty
    /// - `quiz.rounds` is zero
    /// - `logging.directory` is empty
    /// - `logging.level` is not a known level
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.data_file.trim().is_empty() {
            errors.push(ValidationError::new(
                "dataFile",
                "The words file cannot be empty. Example: \"data/words.csv\"",
            ));
        }

        if self.quiz.rounds == Some(0) {
            errors.push(ValidationError::new(
                "quiz.rounds",
                "A quiz needs at least one round. Remove this field to ask every word",
            ));
        }

        if let Some(directory) = &self.logging.directory
            && directory.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "logging.directory",
                "The directory cannot be empty. Remove this field to log to stderr",
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown level \"{}\". Expected one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = VocabSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"quiz": {"rounds": 5}}"#;

        let settings: VocabSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.data_file, eq("data/words.csv"));
        assert_that!(settings.quiz.rounds, some(eq(5)));
        assert_that!(settings.logging.level, eq("warn"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: VocabSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings, eq(&VocabSettings::default()));
    }

    #[rstest]
    fn deserialize_camel_case_fields() {
        let json = r#"{"dataFile": "words.csv", "logging": {"directory": "logs", "level": "debug"}}"#;

        let settings: VocabSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.data_file, eq("words.csv"));
        assert_that!(settings.logging.directory, some(eq("logs")));
        assert_that!(settings.logging.level, eq("debug"));
    }

    #[rstest]
    fn validate_invalid_data_file_empty() {
        let settings = VocabSettings { data_file: String::new(), ..VocabSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("dataFile")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_zero_rounds() {
        let settings =
            VocabSettings { quiz: QuizConfig { rounds: Some(0) }, ..VocabSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("quiz.rounds"))])
        );
    }

    #[rstest]
    #[case::trace("trace")]
    #[case::debug("debug")]
    #[case::info("info")]
    #[case::warn("warn")]
    #[case::error("error")]
    fn validate_known_log_levels(#[case] level: &str) {
        let settings = VocabSettings {
            logging: LoggingConfig { directory: None, level: level.to_string() },
            ..VocabSettings::default()
        };

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn validate_collects_every_error() {
        let settings = VocabSettings {
            data_file: " ".to_string(),
            quiz: QuizConfig { rounds: Some(0) },
            logging: LoggingConfig { directory: Some(String::new()), level: "loud".to_string() },
        };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![
                field!(ValidationError.field_path, eq("dataFile")),
                field!(ValidationError.field_path, eq("quiz.rounds")),
                field!(ValidationError.field_path, eq("logging.directory")),
                all![
                    field!(ValidationError.field_path, eq("logging.level")),
                    field!(ValidationError.message, contains_substring("loud"))
                ]
            ])
        );
    }

    #[rstest]
    fn config_error_lists_validation_errors() {
        let error = ConfigError::ValidationErrors(vec![
            ValidationError::new("dataFile", "empty"),
            ValidationError::new("quiz.rounds", "zero"),
        ]);

        assert_that!(
            error.to_string(),
            eq("Configuration validation failed:\n  1. dataFile - empty\n  2. quiz.rounds - zero")
        );
    }
}
