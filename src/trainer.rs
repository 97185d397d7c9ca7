//! Vocabulary quiz over the word pairs of two languages

use std::io::{
    BufRead,
    Write,
};

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::vocab::{
    TranslationStore,
    WordPair,
};

/// Answer that ends a quiz early
const EXIT_COMMAND: &str = "exit";

/// Reasons a quiz cannot start or had to stop
#[derive(Error, Debug)]
pub enum TrainerError {
    /// No concept has a word in both languages
    #[error("No words to practise from '{from}' to '{to}'")]
    NoPairs { from: String, to: String },

    #[error("Quiz input or output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizSummary {
    /// Questions answered
    pub asked: usize,
    /// Answers that matched
    pub correct: usize,
}

impl QuizSummary {
    /// Share of correct answers, rounded down. Zero when nothing was asked.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.asked == 0 { 0 } else { self.correct * 100 / self.asked }
    }
}

/// Asks for translations of words from one language into another.
#[derive(Debug, Clone)]
pub struct Trainer {
    /// Language the questions are in
    from: String,
    /// Language the answers are expected in
    to: String,
    /// Every pair that can be asked, in store order
    pairs: Vec<WordPair>,
}

impl Trainer {
    /// Collects the pairs of two languages from the store.
    ///
    /// # Errors
    /// - `TrainerError::NoPairs` if no concept has both languages
    pub fn new(store: &TranslationStore, from: &str, to: &str) -> Result<Self, TrainerError> {
        let from = from.trim().to_lowercase();
        let to = to.trim().to_lowercase();
        let pairs = store.pairs(&from, &to);
        if pairs.is_empty() {
            return Err(TrainerError::NoPairs { from, to });
        }
        tracing::debug!(from = %from, to = %to, pairs = pairs.len(), "Prepared quiz");
        Ok(Self { from, to, pairs })
    }

    /// Language of the questions, lower-cased
    #[must_use]
    pub fn from_language(&self) -> &str {
        &self.from
    }

    /// Language of the expected answers, lower-cased
    #[must_use]
    pub fn to_language(&self) -> &str {
        &self.to
    }

    /// Pairs that can be asked
    #[must_use]
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Runs one quiz.
    ///
    /// Questions come in an order shuffled by `rng`, at most `rounds` of
    /// them (every pair when `None`). Answers are compared trimmed and
    /// ignoring case. Typing `exit` or closing the input ends the quiz
    /// early; the unanswered question does not count.
    ///
    /// # Errors
    /// - `TrainerError::Io` if reading an answer or writing fails
    pub fn run<R, W, G>(
        &self,
        input: &mut R,
        output: &mut W,
        rng: &mut G,
        rounds: Option<usize>,
    ) -> Result<QuizSummary, TrainerError>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let mut questions: Vec<&WordPair> = self.pairs.iter().collect();
        questions.shuffle(rng);
        questions.truncate(rounds.unwrap_or(questions.len()));

        writeln!(
            output,
            "Translate {} questions from {} into {}. Type '{EXIT_COMMAND}' to stop.",
            questions.len(),
            self.from,
            self.to
        )?;

        let mut summary = QuizSummary::default();
        let mut answer = String::new();
        for pair in questions {
            write!(output, "{}: ", pair.first)?;
            output.flush()?;

            answer.clear();
            if input.read_line(&mut answer)? == 0 {
                writeln!(output)?;
                break;
            }
            let answer = answer.trim().to_lowercase();
            if answer == EXIT_COMMAND {
                break;
            }

            summary.asked += 1;
            if answer == pair.second.to_lowercase() {
                summary.correct += 1;
                writeln!(output, "Correct!")?;
            } else {
                writeln!(output, "Wrong, the answer is '{}'.", pair.second)?;
            }
        }

        writeln!(
            output,
            "You got {} of {} right ({}%).",
            summary.correct,
            summary.asked,
            summary.percent()
        )?;
        tracing::debug!(asked = summary.asked, correct = summary.correct, "Quiz finished");
        Ok(summary)
    }
}
