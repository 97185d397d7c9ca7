//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::SettingsOverrides;

/// Practise and maintain a multi-language vocabulary
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Words file to load and save, instead of `dataFile`
    #[arg(short, long)]
    pub data: Option<String>,

    /// Directory holding `.vocab-trainer.json`; a relative `dataFile`
    /// in it is resolved against this directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Questions per quiz, instead of `quiz.rounds`
    #[arg(short, long)]
    pub rounds: Option<usize>,
}

impl Args {
    /// Settings values given on the command line
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides { data_file: self.data.clone(), rounds: self.rounds }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_parse_long_flags() {
        let args =
            Args::try_parse_from(["vocab-trainer", "--data", "w.csv", "--config", "cfg", "--rounds", "4"])
                .unwrap();

        assert_that!(args.data, some(eq("w.csv")));
        assert_that!(args.config, some(eq(&PathBuf::from("cfg"))));
        assert_that!(args.rounds, some(eq(4)));
    }

    #[rstest]
    fn test_parse_rejects_non_numeric_rounds() {
        assert_that!(Args::try_parse_from(["vocab-trainer", "-r", "many"]).is_err(), eq(true));
    }

    #[rstest]
    fn test_overrides_carry_given_values_only() {
        let args = Args { rounds: Some(2), config: Some(PathBuf::from("cfg")), ..Args::default() };

        assert_that!(args.overrides(), eq(&SettingsOverrides { data_file: None, rounds: Some(2) }));
    }

    #[rstest]
    fn test_overrides_without_arguments_are_empty() {
        assert_that!(Args::default().overrides(), eq(&SettingsOverrides::default()));
    }
}
