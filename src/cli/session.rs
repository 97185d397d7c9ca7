//! Numbered menu over a words file

use std::io::{
    BufRead,
    Write,
};
use std::path::PathBuf;

use rand::Rng;

use super::CliError;
use crate::input::save_words_file;
use crate::trainer::{
    Trainer,
    TrainerError,
};
use crate::vocab::TranslationStore;
use crate::vocab::format::FIELD_SEPARATOR;

/// Input that leaves the menu or an unfinished action
const EXIT_COMMAND: &str = "exit";

/// Rule printed around the menu prompt
const SEPARATOR: &str = "---------------------------------";

/// Menu entries as shown to the user
const MENU: &str = "\
(1) Play vocabulary trainer
(2) Search for word
(3) Get info to word
(4) Get all words in the dictionary
(5) Change/add information
(6) Add language
Type 'exit' to stop";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// Vocabulary quiz
    Quiz,
    /// Whether a word exists
    Search,
    /// Translations of a word
    Info,
    /// The whole table
    ListAll,
    /// Change or add a translation
    Change,
    /// Register a language
    AddLanguage,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Quiz),
            "2" => Some(Self::Search),
            "3" => Some(Self::Info),
            "4" => Some(Self::ListAll),
            "5" => Some(Self::Change),
            "6" => Some(Self::AddLanguage),
            _ => None,
        }
    }
}

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the menu
    Continue,
    /// Input ended
    Quit,
}

/// One interactive session over a store loaded from `data_file`.
///
/// Every successful change is written back to `data_file` right away.
#[derive(Debug)]
pub struct Session {
    /// Words being worked on
    store: TranslationStore,
    /// Where changes are saved
    data_file: PathBuf,
    /// Questions per quiz, `None` for every pair
    rounds: Option<usize>,
}

impl Session {
    /// Menu over `store`, saving edits to `data_file`.
    #[must_use]
    pub const fn new(store: TranslationStore, data_file: PathBuf, rounds: Option<usize>) -> Self {
        Self { store, data_file, rounds }
    }

    /// Store as edited so far
    #[must_use]
    pub const fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Runs the menu until `exit` or the end of input.
    ///
    /// Failed actions print a message and return to the menu.
    ///
    /// # Errors
    /// - `CliError::Io` if the console cannot be read or written
    pub fn run<R, W, G>(&mut self, input: &mut R, output: &mut W, rng: &mut G) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        writeln!(output, "{SEPARATOR}\n|           Dictionary          |\n{SEPARATOR}")?;

        loop {
            writeln!(output, "{MENU}")?;
            let choice = loop {
                writeln!(output, "{SEPARATOR}")?;
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };
                writeln!(output, "{SEPARATOR}")?;
                if line.eq_ignore_ascii_case(EXIT_COMMAND) {
                    return Ok(());
                }
                if let Some(choice) = MenuChoice::parse(&line) {
                    break choice;
                }
            };

            tracing::debug!(?choice, "Menu choice");
            let flow = match choice {
                MenuChoice::Quiz => self.quiz(input, output, rng)?,
                MenuChoice::Search => self.search(input, output)?,
                MenuChoice::Info => self.info(input, output)?,
                MenuChoice::ListAll => {
                    write!(output, "{}", self.store)?;
                    Flow::Continue
                }
                MenuChoice::Change => self.change(input, output)?,
                MenuChoice::AddLanguage => self.add_language(input, output)?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Known languages for prompts, e.g. `[english, german]`
    fn language_hint(&self) -> String {
        format!("[{}]", self.store.languages().join(", "))
    }

    /// Menu 1: asks for two languages and runs a quiz.
    fn quiz<R, W, G>(&self, input: &mut R, output: &mut W, rng: &mut G) -> Result<Flow, CliError>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let hint = self.language_hint();
        let Some(from) = prompt(input, output, &format!("Language to test yourself in {hint}: "))?
        else {
            return Ok(Flow::Quit);
        };
        let Some(to) = prompt(input, output, &format!("Language to translate into {hint}: "))?
        else {
            return Ok(Flow::Quit);
        };

        let trainer = match Trainer::new(&self.store, &from, &to) {
            Ok(trainer) => trainer,
            Err(e) => {
                writeln!(output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        match trainer.run(input, output, rng, self.rounds) {
            Ok(_) | Err(TrainerError::NoPairs { .. }) => Ok(Flow::Continue),
            Err(TrainerError::Io(e)) => Err(CliError::Io(e)),
        }
    }

    /// Menu 2
    fn search<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Flow, CliError> {
        let Some(word) = prompt(input, output, "Enter a word you want to know if it exists: ")?
        else {
            return Ok(Flow::Quit);
        };
        if self.store.contains(&word) {
            writeln!(output, "The word exists")?;
        } else {
            writeln!(output, "The word doesn't exist")?;
        }
        Ok(Flow::Continue)
    }

    /// Menu 3
    fn info<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Flow, CliError> {
        let Some(word) = prompt(input, output, "Enter a word you want to get info of: ")? else {
            return Ok(Flow::Quit);
        };
        match self.store.word_information(&word) {
            Some(information) => write!(output, "{information}")?,
            None => writeln!(output, "Could not find word!")?,
        }
        Ok(Flow::Continue)
    }

    /// Menu 5: asks for index, language, kind and the new information.
    fn change<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Flow, CliError> {
        write!(output, "{}", self.store)?;

        let index = loop {
            let Some(line) = prompt(
                input,
                output,
                "Enter the index of the word (a non-existing index adds a new translation) or exit: ",
            )?
            else {
                return Ok(Flow::Quit);
            };
            if line.eq_ignore_ascii_case(EXIT_COMMAND) {
                return Ok(Flow::Continue);
            }
            if let Ok(index) = line.parse::<usize>() {
                break index;
            }
        };

        let Some(language) =
            prompt(input, output, &format!("Enter the language of the word {}: ", self.language_hint()))?
        else {
            return Ok(Flow::Quit);
        };

        let change_usage = loop {
            let Some(line) = prompt(
                input,
                output,
                "Enter if the new information is a usage (true) or a word or both (false): ",
            )?
            else {
                return Ok(Flow::Quit);
            };
            if let Ok(change_usage) = line.to_lowercase().parse::<bool>() {
                break change_usage;
            }
        };

        let Some(information) = prompt(
            input,
            output,
            "Enter the new information (WORD-USAGE for a word and its usage): ",
        )?
        else {
            return Ok(Flow::Quit);
        };

        // shown 1-based; 0 and anything past the end add a new translation
        let index = index.checked_sub(1);
        match self.store.change_information(&information, &language, index, change_usage) {
            Ok(index) => {
                writeln!(output, "Changed translation {:04}.", index + 1)?;
                self.save(output)?;
            }
            Err(e) => writeln!(output, "Changing/adding didn't work: {e}")?,
        }
        Ok(Flow::Continue)
    }

    /// Menu 6
    fn add_language<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, CliError> {
        let Some(language) = prompt(input, output, "Enter the language you want to add: ")? else {
            return Ok(Flow::Quit);
        };
        if language.is_empty() || language.contains(FIELD_SEPARATOR) {
            writeln!(output, "'{language}' is not a valid language name")?;
        } else if self.store.try_add_language(&language) {
            writeln!(output, "Added {}", language.to_lowercase())?;
            self.save(output)?;
        } else {
            writeln!(output, "{} is already known", language.to_lowercase())?;
        }
        Ok(Flow::Continue)
    }

    /// Writes the store back to the words file, reporting failure to the
    /// user without ending the session.
    fn save<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        match save_words_file(&self.store, &self.data_file) {
            Ok(()) => tracing::info!("Saved words to {}", self.data_file.display()),
            Err(e) => {
                tracing::warn!("Failed to save words: {e}");
                writeln!(output, "Could not save the words: {e}")?;
            }
        }
        Ok(())
    }
}

/// Reads one trimmed line; `None` at the end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Writes `text` without a newline, then reads the answer.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}
