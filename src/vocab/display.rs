//! Console rendering of the store and of single words

use std::fmt::{
    self,
    Write as _,
};

use super::store::TranslationStore;
use super::types::TranslationSet;

/// Width of the language and word columns
const NAME_WIDTH: usize = 16;

/// Width of a usage column in the table
const USAGE_WIDTH: usize = 15;

/// Upper-cases the first character.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Renders the translations of one concept, one row per known language
/// the concept has.
pub(crate) fn render_word_information(languages: &[String], translations: &TranslationSet) -> String {
    let mut out = format!("{:<NAME_WIDTH$}{:<NAME_WIDTH$}{}\n", "Language", "Word", "Usage");
    for language in languages {
        if let Some(word_data) = translations.get(language.as_str()) {
            let _ = writeln!(
                out,
                "{:<NAME_WIDTH$}{:<NAME_WIDTH$}{}",
                capitalize(language),
                capitalize(&word_data.word),
                word_data.usage
            );
        }
    }
    out
}

/// Writes `cells` as `(name, usage)` column pairs. The last usage is left
/// unpadded.
fn write_columns(
    f: &mut fmt::Formatter<'_>,
    cells: impl ExactSizeIterator<Item = (String, &'static str)>,
) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    for (column, (name, usage)) in cells.enumerate() {
        if column == last {
            write!(f, "{name:<NAME_WIDTH$}{usage}")?;
        } else {
            write!(f, "{name:<NAME_WIDTH$}{usage:<USAGE_WIDTH$}")?;
        }
    }
    writeln!(f)
}

/// Numbered table of every concept, one column pair per language.
///
/// Row numbers start at 1. A store without languages renders as nothing.
impl fmt::Display for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let languages = self.languages();
        if languages.is_empty() {
            return Ok(());
        }

        f.write_str("      ")?;
        write_columns(f, languages.iter().map(|language| (capitalize(language), "Usage")))?;

        for (row, translations) in self.translations().iter().enumerate() {
            let translations = translations.borrow();
            write!(f, "{:04}. ", row + 1)?;
            write_columns(
                f,
                languages.iter().map(|language| match translations.get(language.as_str()) {
                    Some(word_data) => (capitalize(&word_data.word), word_data.usage.as_str()),
                    None => (String::new(), ""),
                }),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::sample_store;
    use crate::vocab::types::{
        Usage,
        WordData,
    };

    #[rstest]
    #[case::ascii("english", "English")]
    #[case::cyrillic("кот", "Кот")]
    #[case::single("a", "A")]
    #[case::empty("", "")]
    #[case::already_upper("Sol", "Sol")]
    fn test_capitalize(#[case] text: &str, #[case] expected: &str) {
        assert_that!(capitalize(text), eq(expected));
    }

    #[rstest]
    fn test_word_information_of_sample_word() {
        let info = sample_store().word_information("CAT").unwrap();

        assert_eq!(
            info,
            "Language        Word            Usage\n\
             English         Cat             often\n\
             German          Katze           never\n\
             Spanish         Gato            rarely\n\
             Russian         Кот             sometimes\n"
        );
    }

    #[rstest]
    fn test_word_information_skips_missing_languages() {
        let languages = vec!["english".to_string(), "german".to_string()];
        let mut translations = TranslationSet::new();
        translations.insert("german".to_string(), WordData::new("hund", Usage::Often));

        assert_eq!(
            render_word_information(&languages, &translations),
            "Language        Word            Usage\nGerman          Hund            often\n"
        );
    }

    #[rstest]
    fn test_table_of_sample_store() {
        assert_eq!(
            sample_store().to_string(),
            "      English         Usage          German          Usage          Spanish         Usage          Russian         Usage\n\
             0001. Cat             often          Katze           never          Gato            rarely         Кот             sometimes\n\
             0002. Dog             sometimes      Hund            often          Perro           never          Собака          often\n\
             0003. Sun             sometimes      Sonne           rarely         Sol             sometimes      Солнце          never\n"
        );
    }

    #[rstest]
    fn test_table_leaves_missing_translations_blank() {
        let mut translations = TranslationSet::new();
        translations.insert("german".to_string(), WordData::new("hund", Usage::Often));
        let store = TranslationStore::from_translations(
            ["english".to_string(), "german".to_string()],
            [translations],
        );

        assert_eq!(
            store.to_string(),
            "      English         Usage          German          Usage\n\
             0001.                                Hund            often\n"
        );
    }

    #[rstest]
    fn test_table_without_languages_is_empty() {
        assert_that!(TranslationStore::new().to_string(), eq(""));
    }
}
