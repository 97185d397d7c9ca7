//! Settings for a session: the settings file, command line overrides and
//! the words file they point at

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    VocabSettings,
};

/// Settings file name, looked up in the config directory
pub const CONFIG_FILE_NAME: &str = ".vocab-trainer.json";

/// Values given on the command line. Each one that is set replaces its
/// settings field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Replaces `dataFile`; relative paths stay relative to the working
    /// directory
    pub data_file: Option<String>,
    /// Replaces `quiz.rounds`
    pub rounds: Option<usize>,
}

/// Validated settings together with the resolved words file path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    settings: VocabSettings,
    /// Words file to load and save
    data_path: PathBuf,
}

impl ConfigManager {
    /// Loads and validates the settings of `config_dir`.
    ///
    /// Without a directory, or without a settings file in it, the defaults
    /// are used. A relative `dataFile` is resolved against the directory.
    ///
    /// # Errors
    /// - `ConfigError::IoError` if the settings file cannot be read
    /// - `ConfigError::ParseError` if it is not valid settings JSON
    /// - `ConfigError::ValidationErrors` if a value is out of range
    pub fn load(config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match config_dir {
            Some(dir) => read_settings_file(&dir.join(CONFIG_FILE_NAME))?.unwrap_or_default(),
            None => VocabSettings::default(),
        };
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let data_file = Path::new(&settings.data_file);
        let data_path = match config_dir {
            Some(dir) if data_file.is_relative() => dir.join(data_file),
            _ => data_file.to_path_buf(),
        };
        tracing::debug!(config_dir = ?config_dir, data_path = %data_path.display(), "Loaded settings");

        Ok(Self { settings, data_path })
    }

    /// Applies command line values over the loaded settings.
    ///
    /// # Errors
    /// - `ConfigError::ValidationErrors` if an override is out of range;
    ///   nothing changes then
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) -> Result<(), ConfigError> {
        let mut settings = self.settings.clone();
        if let Some(data_file) = &overrides.data_file {
            settings.data_file.clone_from(data_file);
        }
        if let Some(rounds) = overrides.rounds {
            settings.quiz.rounds = Some(rounds);
        }
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        if let Some(data_file) = &overrides.data_file {
            self.data_path = PathBuf::from(data_file);
        }
        self.settings = settings;
        tracing::debug!(overrides = ?overrides, "Applied command line settings");
        Ok(())
    }

    /// Validated settings, overrides included
    #[must_use]
    pub const fn settings(&self) -> &VocabSettings {
        &self.settings
    }

    /// Words file the session loads and saves
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

/// Reads one settings file. A missing file is `None`.
fn read_settings_file(path: &Path) -> Result<Option<VocabSettings>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No settings file");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::{
        fixture,
        rstest,
    };
    use tempfile::TempDir;

    use super::*;

    #[fixture]
    fn config_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    fn write_settings(dir: &TempDir, content: &str) {
        fs::write(dir.path().join(CONFIG_FILE_NAME), content).unwrap();
    }

    #[rstest]
    fn test_load_without_directory_uses_defaults() {
        let manager = ConfigManager::load(None).unwrap();

        assert_that!(manager.settings(), eq(&VocabSettings::default()));
        assert_that!(manager.data_path(), eq(Path::new("data/words.csv")));
    }

    #[rstest]
    fn test_load_without_settings_file_resolves_default_path(config_dir: TempDir) {
        let manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        assert_that!(manager.settings(), eq(&VocabSettings::default()));
        assert_that!(manager.data_path(), eq(config_dir.path().join("data/words.csv").as_path()));
    }

    #[rstest]
    fn test_load_reads_settings_file(config_dir: TempDir) {
        write_settings(
            &config_dir,
            r#"{"dataFile": "vocab/mine.csv", "quiz": {"rounds": 3}, "logging": {"level": "info"}}"#,
        );

        let manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        assert_that!(manager.settings().quiz.rounds, some(eq(3)));
        assert_that!(manager.settings().logging.level, eq("info"));
        assert_that!(manager.data_path(), eq(config_dir.path().join("vocab/mine.csv").as_path()));
    }

    #[rstest]
    fn test_load_keeps_absolute_data_file(config_dir: TempDir) {
        let elsewhere = TempDir::new().unwrap();
        let words = elsewhere.path().join("words.csv");
        write_settings(&config_dir, &serde_json::json!({ "dataFile": words }).to_string());

        let manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        assert_that!(manager.data_path(), eq(words.as_path()));
    }

    #[rstest]
    #[case::empty_data_file(r#"{"dataFile": ""}"#)]
    #[case::zero_rounds(r#"{"quiz": {"rounds": 0}}"#)]
    fn test_load_rejects_invalid_values(config_dir: TempDir, #[case] content: &str) {
        write_settings(&config_dir, content);

        let result = ConfigManager::load(Some(config_dir.path()));

        assert_that!(matches!(result, Err(ConfigError::ValidationErrors(_))), eq(true));
    }

    #[rstest]
    fn test_load_rejects_malformed_json(config_dir: TempDir) {
        write_settings(&config_dir, "invalid json");

        let result = ConfigManager::load(Some(config_dir.path()));

        assert_that!(matches!(result, Err(ConfigError::ParseError(_))), eq(true));
    }

    #[rstest]
    fn test_overrides_replace_given_values_only(config_dir: TempDir) {
        write_settings(&config_dir, r#"{"dataFile": "mine.csv", "quiz": {"rounds": 3}}"#);
        let mut manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        manager.apply_overrides(&SettingsOverrides { rounds: Some(5), ..Default::default() }).unwrap();

        assert_that!(manager.settings().quiz.rounds, some(eq(5)));
        assert_that!(manager.data_path(), eq(config_dir.path().join("mine.csv").as_path()));
    }

    #[rstest]
    fn test_data_file_override_is_not_resolved_against_config_dir(config_dir: TempDir) {
        let mut manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        manager
            .apply_overrides(&SettingsOverrides {
                data_file: Some("here.csv".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_that!(manager.settings().data_file, eq("here.csv"));
        assert_that!(manager.data_path(), eq(Path::new("here.csv")));
    }

    #[rstest]
    fn test_invalid_override_changes_nothing(config_dir: TempDir) {
        let mut manager = ConfigManager::load(Some(config_dir.path())).unwrap();

        let result = manager.apply_overrides(&SettingsOverrides {
            data_file: Some("other.csv".to_string()),
            rounds: Some(0),
        });

        assert_that!(matches!(result, Err(ConfigError::ValidationErrors(_))), eq(true));
        assert_that!(manager.settings(), eq(&VocabSettings::default()));
        assert_that!(manager.data_path(), eq(config_dir.path().join("data/words.csv").as_path()));
    }
}
