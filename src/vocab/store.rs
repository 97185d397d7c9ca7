//! Word index and ordered translation list over shared translation sets

use std::rc::Rc;

use super::display;
use super::error::{
    PersistError,
    StoreError,
};
use super::format::{
    self,
    FIELD_SEPARATOR,
};
use super::types::{
    SharedTranslations,
    TranslationSet,
    Usage,
    WordData,
    WordPair,
    share,
};
use crate::collections::ChainedMap;

/// Vocabulary held as two views over the same translation sets.
///
/// - `translations` lists every concept once; its positions are the
///   indices used for editing.
/// - `word_index` maps each lower-cased word to the set it belongs to.
///
/// Both hold handles to the same sets, so an edit through either view is
/// visible in the other. When two concepts share a spelling, the word
/// resolves to the first one in list order.
#[derive(Debug, Default)]
pub struct TranslationStore {
    /// Lower-cased word → owning translation set
    word_index: ChainedMap<String, SharedTranslations>,
    /// Every translation set once, in file order
    translations: Vec<SharedTranslations>,
    /// Known languages, lower-cased, in column order
    languages: Vec<String>,
}

impl TranslationStore {
    /// Creates a store without languages or words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from languages and translation sets, then indexes
    /// every word.
    #[must_use]
    pub fn from_translations(
        languages: impl IntoIterator<Item = String>,
        translations: impl IntoIterator<Item = TranslationSet>,
    ) -> Self {
        let mut store = Self::new();
        for language in languages {
            store.try_add_language(&language);
        }
        store.translations = translations.into_iter().map(share).collect();
        store.rebuild_word_index();
        store
    }

    /// Parses words-file lines, header first.
    ///
    /// Lines without a single readable field are skipped.
    ///
    /// # Errors
    /// - `PersistError::MissingHeader` if there is no header line
    pub fn from_lines<I, S>(lines: I) -> Result<Self, PersistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let header = lines.next().ok_or(PersistError::MissingHeader)?;
        let languages = format::parse_header(header.as_ref());
        if languages.iter().all(String::is_empty) {
            return Err(PersistError::MissingHeader);
        }

        let mut translations = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match format::parse_translation_line(&languages, line) {
                Some(set) => translations.push(set),
                // header is line 1
                None => tracing::warn!(line = offset + 2, "Skipping line without a translation"),
            }
        }

        tracing::debug!(
            languages = languages.len(),
            translations = translations.len(),
            "Parsed words data"
        );
        Ok(Self::from_translations(languages, translations))
    }

    /// Renders the store as words-file lines, header first.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        std::iter::once(format::render_header(&self.languages))
            .chain(self.translations.iter().map(|set| {
                format::render_translation_line(&self.languages, &set.borrow())
            }))
            .collect()
    }

    /// Rebuilds the word index from the ordered list.
    ///
    /// The first set claiming a word keeps it.
    pub fn rebuild_word_index(&mut self) {
        self.word_index.clear();
        for set in &self.translations {
            for word_data in set.borrow().values() {
                let word = word_data.word.to_lowercase();
                if !self.word_index.contains_key(word.as_str()) {
                    self.word_index.insert(word, Rc::clone(set));
                }
            }
        }
    }

    /// Known languages, lower-cased, in column order
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Every translation set once, in list order
    #[must_use]
    pub fn translations(&self) -> &[SharedTranslations] {
        &self.translations
    }

    /// Lower-cased word → translation set
    #[must_use]
    pub const fn word_index(&self) -> &ChainedMap<String, SharedTranslations> {
        &self.word_index
    }

    /// Number of translation sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the store has no concepts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Returns `true` if any concept has this word, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_index.contains_key(word.to_lowercase().as_str())
    }

    /// Translation set a word belongs to, ignoring case.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<SharedTranslations> {
        self.word_index.get(word.to_lowercase().as_str()).map(Rc::clone)
    }

    /// Rendered translations of a word, or `None` if the word is unknown.
    #[must_use]
    pub fn word_information(&self, word: &str) -> Option<String> {
        let set = self.lookup(word)?;
        let set = set.borrow();
        Some(display::render_word_information(&self.languages, &set))
    }

    /// Words of every concept that has both languages, in list order.
    ///
    /// Empty when either language is unknown.
    #[must_use]
    pub fn pairs(&self, first_language: &str, second_language: &str) -> Vec<WordPair> {
        let first_language = first_language.trim().to_lowercase();
        let second_language = second_language.trim().to_lowercase();

        self.translations
            .iter()
            .filter_map(|set| {
                let set = set.borrow();
                let first = set.get(first_language.as_str())?;
                let second = set.get(second_language.as_str())?;
                Some(WordPair::new(first.word.clone(), second.word.clone()))
            })
            .collect()
    }

    /// Registers a language, lower-cased.
    ///
    /// Returns `false` if it was already known.
    pub fn try_add_language(&mut self, language: &str) -> bool {
        let language = language.trim().to_lowercase();
        if self.languages.contains(&language) {
            return false;
        }
        tracing::debug!(language = %language, "Adding language");
        self.languages.push(language);
        true
    }

    /// Changes or adds one language slot of a concept.
    ///
    /// `information` is either a full `word-usage` field, a lone word (keeps
    /// the slot's current usage) or, with `change_usage`, a lone usage
    /// category (keeps the slot's current word). Both it and `language` are
    /// lower-cased. An `index` that is `None` or out of range adds a new
    /// concept. An unknown language is registered.
    ///
    /// Returns the index of the edited concept. On error nothing changes.
    ///
    /// # Errors
    /// - `StoreError::InvalidInput` for blank input, an unknown usage, or a
    ///   lone word or usage with nothing in the slot to complete it
    /// - `StoreError::Conflict` if a lone word already belongs to another
    ///   concept
    pub fn change_information(
        &mut self,
        information: &str,
        language: &str,
        index: Option<usize>,
        change_usage: bool,
    ) -> Result<usize, StoreError> {
        let information = information.trim().to_lowercase();
        let language = language.trim().to_lowercase();
        let target = index.and_then(|index| self.translations.get(index)).map(Rc::clone);

        let word_data = self.validate_change(&information, &language, target.as_ref(), change_usage)?;

        let (index, target) = if let Some(pair) = index.zip(target) {
            pair
        } else {
            let set = share(TranslationSet::new());
            self.translations.push(Rc::clone(&set));
            (self.translations.len() - 1, set)
        };

        self.try_add_language(&language);

        let previous = target.borrow_mut().insert(language.clone(), word_data.clone());
        if let Some(previous) = previous {
            self.reassign_word(&previous.word);
        }
        self.reassign_word(&word_data.word);

        tracing::debug!(index, language = %language, word = %word_data, "Changed translation");
        Ok(index)
    }

    /// Works out the new word data for a slot without touching any state.
    fn validate_change(
        &self,
        information: &str,
        language: &str,
        target: Option<&SharedTranslations>,
        change_usage: bool,
    ) -> Result<WordData, StoreError> {
        if information.is_empty() {
            return Err(StoreError::InvalidInput("the information must not be blank".to_string()));
        }
        if language.is_empty() {
            return Err(StoreError::InvalidInput("the language must not be blank".to_string()));
        }
        if information.contains(FIELD_SEPARATOR) || language.contains(FIELD_SEPARATOR) {
            return Err(StoreError::InvalidInput(format!(
                "'{FIELD_SEPARATOR}' cannot be part of a word or language"
            )));
        }

        if let Some(word_data) = format::parse_word_data(information) {
            return Ok(word_data);
        }

        let current = target.and_then(|set| set.borrow().get(language).cloned());

        if change_usage {
            let usage: Usage =
                information.parse().map_err(|e| StoreError::InvalidInput(format!("{e}")))?;
            let current = current.ok_or_else(|| {
                StoreError::InvalidInput(format!(
                    "there is no {language} word to give the usage '{usage}'"
                ))
            })?;
            return Ok(WordData::new(current.word, usage));
        }

        if let Some(owner) = self.word_index.get(information)
            && target.is_none_or(|target| !Rc::ptr_eq(owner, target))
        {
            return Err(StoreError::Conflict { word: information.to_string() });
        }

        let current = current.ok_or_else(|| {
            StoreError::InvalidInput(format!(
                "'{information}' needs a usage category, e.g. '{information}-often'"
            ))
        })?;
        Ok(WordData::new(information, current.usage))
    }

    /// Points `word` at the first set in list order that still spells it,
    /// or drops it from the index when no set does.
    ///
    /// This is the rule `rebuild_word_index` applies, limited to one word.
    fn reassign_word(&mut self, word: &str) {
        let word = word.to_lowercase();
        let owner = self
            .translations
            .iter()
            .find(|set| set.borrow().values().any(|data| data.word.to_lowercase() == word))
            .map(Rc::clone);
        match owner {
            Some(owner) => {
                self.word_index.insert(word, owner);
            }
            None => {
                self.word_index.remove(word.as_str());
            }
        }
    }
}
