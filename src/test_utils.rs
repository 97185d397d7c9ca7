//! Shared fixtures for unit tests
#![cfg(test)]

use crate::vocab::TranslationStore;

/// Words file with three concepts in four languages
pub(crate) const SAMPLE_LINES: [&str; 4] = [
    "english;german;spanish;russian",
    "cat-often;katze-never;gato-rarely;кот-sometimes",
    "dog-sometimes;hund-often;perro-never;собака-often",
    "sun-sometimes;sonne-rarely;sol-sometimes;солнце-never",
];

/// Store loaded from [`SAMPLE_LINES`]
#[allow(clippy::unwrap_used)]
pub(crate) fn sample_store() -> TranslationStore {
    TranslationStore::from_lines(SAMPLE_LINES).unwrap()
}
