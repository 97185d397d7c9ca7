//! Loading, editing and saving a words file through the public API

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use googletest::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{
    fixture,
    rstest,
};
use tempfile::TempDir;
use vocab_trainer::input::{
    load_words_file,
    save_words_file,
};
use vocab_trainer::vocab::{
    StoreError,
    TranslationStore,
    Usage,
    WordData,
    WordPair,
};

const SAMPLE: &str = "\
english;german;spanish;russian
cat-often;katze-never;gato-rarely;кот-sometimes
dog-sometimes;hund-often;perro-never;собака-often
sun-sometimes;sonne-rarely;sol-sometimes;солнце-never
";

struct WordsFile {
    _dir: TempDir,
    path: PathBuf,
}

#[fixture]
fn words_file() -> WordsFile {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.csv");
    fs::write(&path, SAMPLE).unwrap();
    WordsFile { _dir: dir, path }
}

#[rstest]
fn test_load_save_keeps_file_unchanged(words_file: WordsFile) {
    let store = load_words_file(&words_file.path).unwrap();

    save_words_file(&store, &words_file.path).unwrap();

    assert_eq!(fs::read_to_string(&words_file.path).unwrap(), SAMPLE);
}

#[rstest]
fn test_edits_survive_reload(words_file: WordsFile) {
    let mut store = load_words_file(&words_file.path).unwrap();
    store.change_information("handgranate", "english", Some(0), false).unwrap();
    store.change_information("rarely", "german", Some(1), true).unwrap();
    store.change_information("pain-often", "French", Some(1), false).unwrap();
    save_words_file(&store, &words_file.path).unwrap();

    let reloaded = load_words_file(&words_file.path).unwrap();

    assert_eq!(reloaded.languages(), ["english", "german", "spanish", "russian", "french"]);
    assert_that!(reloaded.contains("cat"), eq(false));
    assert_that!(reloaded.contains("Handgranate"), eq(true));
    let dog = reloaded.lookup("dog").unwrap();
    assert_that!(dog.borrow().get("german").cloned(), some(eq(&WordData::new("hund", Usage::Rarely))));
    assert_that!(dog.borrow().get("french").cloned(), some(eq(&WordData::new("pain", Usage::Often))));
    assert_that!(reloaded.lookup("sun").unwrap().borrow().contains_key("french"), eq(false));
}

/// Position in the list of the set each indexed word resolves to.
fn word_owners(store: &TranslationStore) -> Vec<(String, usize)> {
    let mut owners: Vec<(String, usize)> = store
        .word_index()
        .iter()
        .map(|(word, set)| {
            let position =
                store.translations().iter().position(|candidate| Rc::ptr_eq(candidate, set)).unwrap();
            (word.clone(), position)
        })
        .collect();
    owners.sort();
    owners
}

#[rstest]
fn test_reparsed_store_indexes_words_like_the_edited_one(words_file: WordsFile) {
    let mut store = load_words_file(&words_file.path).unwrap();
    store.change_information("taxi-often", "english", Some(0), false).unwrap();
    store.change_information("taxi-never", "german", Some(0), false).unwrap();
    store.change_information("cab-often", "english", Some(0), false).unwrap();
    store.change_information("sonne-often", "german", Some(1), false).unwrap();
    store.change_information("hund-rarely", "german", Some(2), false).unwrap();
    store.change_information("sol-often", "spanish", None, false).unwrap();
    store.change_information("perro", "spanish", Some(0), false).unwrap_err();

    let reparsed = TranslationStore::from_lines(store.to_lines()).unwrap();

    assert_eq!(word_owners(&reparsed), word_owners(&store));
    for (word, set) in store.word_index() {
        let reparsed_set = reparsed.lookup(word).unwrap();
        assert_eq!(*reparsed_set.borrow(), *set.borrow());
    }
    assert_that!(store.contains("taxi"), eq(true));
    assert_that!(store.contains("katze"), eq(false));
}

#[rstest]
fn test_aliases_point_at_one_translation(words_file: WordsFile) {
    let store = load_words_file(&words_file.path).unwrap();

    let spellings = ["sun", "SONNE", "sol", "Солнце"];
    let sets: Vec<_> = spellings.iter().map(|word| store.lookup(word).unwrap()).collect();

    for set in &sets {
        assert_that!(Rc::ptr_eq(set, &store.translations()[2]), eq(true));
    }
}

#[rstest]
fn test_conflicting_edit_leaves_file_untouched(words_file: WordsFile) {
    let mut store = load_words_file(&words_file.path).unwrap();

    let result = store.change_information("perro", "spanish", Some(0), false);

    assert_that!(result, err(eq(&StoreError::Conflict { word: "perro".to_string() })));
    save_words_file(&store, &words_file.path).unwrap();
    assert_eq!(fs::read_to_string(&words_file.path).unwrap(), SAMPLE);
}

#[rstest]
fn test_pairs_after_adding_concept(words_file: WordsFile) {
    let mut store = load_words_file(&words_file.path).unwrap();
    let index = store.change_information("moon-rarely", "english", None, false).unwrap();
    store.change_information("mond-rarely", "german", Some(index), false).unwrap();

    assert_eq!(store.pairs("german", "english"), vec![
        WordPair::new("katze", "cat"),
        WordPair::new("hund", "dog"),
        WordPair::new("sonne", "sun"),
        WordPair::new("mond", "moon"),
    ]);
    assert_that!(store.pairs("spanish", "german").len(), eq(3));
}

#[rstest]
fn test_ragged_lines_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.csv");
    fs::write(
        &path,
        "English;German\n\ncat-often\n;hund-often;extra-never\nnonsense\n\nsun-often;sonne-often\n",
    )
    .unwrap();

    let store = load_words_file(&path).unwrap();

    assert_that!(store.len(), eq(3));
    assert_eq!(store.to_lines(), [
        "english;german",
        "cat-often;",
        ";hund-often",
        "sun-often;sonne-often",
    ]);
}
