//! vocab-trainer
//!
//! Multi-language vocabulary store on a chained hash map, with a words-file
//! format, a quiz and an interactive console menu.

pub mod cli;
pub mod collections;
pub mod config;
pub mod input;
pub mod trainer;
pub mod vocab;

mod test_utils;

pub use vocab::TranslationStore;
