//! Entry point for the interactive vocabulary trainer.

use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use vocab_trainer::cli::{
    Args,
    CliError,
    Session,
    init_logging,
};
use vocab_trainer::config::ConfigManager;
use vocab_trainer::input::load_words_file;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            let _ = writeln!(std::io::stderr().lock(), "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads settings and words, then hands the console to the menu.
fn run(args: &Args) -> Result<(), CliError> {
    let mut config_manager = ConfigManager::load(args.config.as_deref())?;
    config_manager.apply_overrides(&args.overrides())?;
    let settings = config_manager.settings();

    let _guard = init_logging(&settings.logging)?;

    let data_file = config_manager.data_path().to_path_buf();
    let store = load_words_file(&data_file)?;
    let mut session = Session::new(store, data_file, settings.quiz.rounds);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock(), &mut rand::rng())
}
