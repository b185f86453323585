//! Shared startup for the Survey Pro binaries.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Install the terminal logger.
///
/// Failure is ignored: the form works the same without log output.
pub fn init_logging() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
