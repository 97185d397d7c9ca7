//! Words file input and output

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::vocab::{
    PersistError,
    TranslationStore,
};

/// Load a words file into a store.
///
/// A leading byte order mark is ignored.
///
/// # Errors
/// - `PersistError::NotInitialized` if the file does not exist
/// - `PersistError::MissingHeader` if the file has no language header
/// - `PersistError::Io` if the file cannot be read
pub fn load_words_file(path: &Path) -> Result<TranslationStore, PersistError> {
    if !path.exists() {
        return Err(PersistError::NotInitialized(path.to_path_buf()));
    }

    tracing::debug!("Loading words from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let store = TranslationStore::from_lines(content.lines())?;

    tracing::info!(
        translations = store.len(),
        languages = store.languages().len(),
        "Loaded words file {}",
        path.display()
    );
    Ok(store)
}

/// Write a store back to an existing words file.
///
/// The lines go to a temporary file next to the target, which then
/// replaces it, so readers never see a half-written file. The target's
/// permissions carry over to the new file.
///
/// # Errors
/// - `PersistError::NotInitialized` if the file does not exist
/// - `PersistError::Io` if writing or replacing fails
pub fn save_words_file(store: &TranslationStore, path: &Path) -> Result<(), PersistError> {
    if !path.exists() {
        return Err(PersistError::NotInitialized(path.to_path_buf()));
    }

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)?.permissions();
    let mut file = NamedTempFile::new_in(directory)?;
    file.as_file().set_permissions(permissions)?;
    for line in store.to_lines() {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::debug!(translations = store.len(), "Saved words to: {:?}", path);
    Ok(())
}
