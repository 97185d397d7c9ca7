//! Translation data and the store that indexes it

/// Console rendering
mod display;
/// Error types
pub mod error;
/// Words-file line format
pub mod format;
/// Word index and ordered translation list
pub mod store;
/// Value types
pub mod types;

pub use error::{
    PersistError,
    StoreError,
    UnknownUsage,
};
pub use store::TranslationStore;
pub use types::{
    SharedTranslations,
    TranslationSet,
    Usage,
    WordData,
    WordPair,
    share,
};
