//! Settings file and validation
/// Settings loading and command line overrides
mod manager;
/// Settings types and validation
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
    SettingsOverrides,
};
pub use types::{
    ConfigError,
    LOG_LEVELS,
    LoggingConfig,
    QuizConfig,
    ValidationError,
    VocabSettings,
};
