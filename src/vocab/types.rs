//! Vocabulary data types

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::error::UnknownUsage;
use crate::collections::ChainedMap;

/// How often a translated word is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Often,
    Sometimes,
    Rarely,
    Never,
}

impl Usage {
    /// Every category, in file order
    pub const ALL: [Self; 4] = [Self::Often, Self::Sometimes, Self::Rarely, Self::Never];

    /// Token used in words files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Often => "often",
            Self::Sometimes => "sometimes",
            Self::Rarely => "rarely",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Usage {
    type Err = UnknownUsage;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|usage| usage.as_str() == token)
            .ok_or_else(|| UnknownUsage(token.to_string()))
    }
}

/// One language's spelling of a concept, with its usage category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordData {
    pub word: String,
    pub usage: Usage,
}

impl WordData {
    #[must_use]
    pub fn new(word: impl Into<String>, usage: Usage) -> Self {
        Self { word: word.into(), usage }
    }
}

/// Renders as a words-file field, `word-usage`.
impl fmt::Display for WordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.word, self.usage)
    }
}

/// Language name → word data for a single concept.
pub type TranslationSet = ChainedMap<String, WordData>;

/// A translation set shared between the word index and the ordered list.
///
/// Every handle points at the same set, so an edit through one is seen by
/// all of them.
pub type SharedTranslations = Rc<RefCell<TranslationSet>>;

/// Wraps a translation set for sharing.
#[must_use]
pub fn share(translations: TranslationSet) -> SharedTranslations {
    Rc::new(RefCell::new(translations))
}

/// Words for the same concept in two languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self { first: first.into(), second: second.into() }
    }
}
