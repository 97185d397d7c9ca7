//! Store and words file errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors from editing a `TranslationStore`
///
/// A miss on lookup is not an error; lookups return `Option` or `bool`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Blank or malformed edit request
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The word already belongs to a different translation
    #[error("'{word}' already belongs to another translation")]
    Conflict { word: String },
}

/// Errors from reading or writing a words file
#[derive(Error, Debug)]
pub enum PersistError {
    /// The words file does not exist
    #[error("Words file not initialized: {} does not exist", .0.display())]
    NotInitialized(PathBuf),
    /// The data has no language header line
    #[error("Words data has no language header")]
    MissingHeader,
    #[error("Failed to access words file: {0}")]
    Io(#[from] std::io::Error),
}

/// A token that is not a usage category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown usage category '{0}', expected one of often, sometimes, rarely, never")]
pub struct UnknownUsage(pub String);
