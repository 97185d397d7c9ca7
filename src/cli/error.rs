//! Errors that end the program

use thiserror::Error;

use crate::config::ConfigError;
use crate::vocab::PersistError;

/// Errors that stop the program
///
/// Errors from a single menu action are reported to the user instead and
/// the session goes on.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("Console input or output failed: {0}")]
    Io(#[from] std::io::Error),
}

