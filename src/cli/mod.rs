//! Console front end: arguments, logging and the menu session
/// Command line arguments
pub mod args;
/// Errors that end a session
mod error;
/// Log output setup
pub mod logging;
/// Interactive menu
pub mod session;

pub use args::Args;
pub use error::CliError;
pub use logging::init_logging;
pub use session::Session;
