//! Reading and writing words files

/// Words file on disk
pub mod words_file;

pub use words_file::{
    load_words_file,
    save_words_file,
};
