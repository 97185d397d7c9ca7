//! Words-file line format
//!
//! The first line lists the languages, `;`-separated and lower-cased. Every
//! following line is one concept with a `word-usage` field per language
//! column. Fields may be empty or unreadable; a line is kept as long as
//! one of its fields parses.

use super::types::{
    TranslationSet,
    WordData,
};

/// Separates the fields of a line
pub const FIELD_SEPARATOR: char = ';';

/// Separates the word from its usage category inside a field
pub const WORD_DATA_SEPARATOR: char = '-';

/// Parses a `word-usage` field.
///
/// The usage is taken after the last separator, so words may contain
/// hyphens themselves (`t-shirt-often`).
#[must_use]
pub fn parse_word_data(field: &str) -> Option<WordData> {
    let (word, usage) = field.trim().rsplit_once(WORD_DATA_SEPARATOR)?;
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    let usage = usage.trim().parse().ok()?;
    Some(WordData::new(word, usage))
}

/// Parses the language header. Column positions are kept as-is.
#[must_use]
pub fn parse_header(line: &str) -> Vec<String> {
    line.to_lowercase().split(FIELD_SEPARATOR).map(|language| language.trim().to_string()).collect()
}

/// Parses one concept line against the header columns.
///
/// Returns `None` when no field of the line could be read.
#[must_use]
pub fn parse_translation_line(languages: &[String], line: &str) -> Option<TranslationSet> {
    let line = line.to_lowercase();
    let mut translations = TranslationSet::new();

    for (column, field) in line.split(FIELD_SEPARATOR).enumerate() {
        let Some(language) = languages.get(column).filter(|language| !language.is_empty()) else {
            if !field.trim().is_empty() {
                tracing::warn!(column, field, "Ignoring field without a language column");
            }
            continue;
        };

        match parse_word_data(field) {
            Some(word_data) => {
                translations.insert(language.clone(), word_data);
            }
            None if field.trim().is_empty() => {}
            None => tracing::warn!(language = %language, field, "Ignoring unreadable field"),
        }
    }

    (!translations.is_empty()).then_some(translations)
}

/// Renders the language header.
#[must_use]
pub fn render_header(languages: &[String]) -> String {
    languages.join(&FIELD_SEPARATOR.to_string())
}

/// Renders a concept in header column order. Missing languages stay empty.
#[must_use]
pub fn render_translation_line(languages: &[String], translations: &TranslationSet) -> String {
    languages
        .iter()
        .map(|language| {
            translations.get(language.as_str()).map(ToString::to_string).unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}
