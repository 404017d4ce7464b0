//! Terminal logger installation

use crate::io::error::Result;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Map the count of `-v` flags to a log level
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger at the level chosen by `verbosity`
///
/// Standard output is left to the answers.
///
/// # Errors
///
/// Returns an error if a global logger is already installed
pub fn init_logging(verbosity: u8) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Debug)
        .set_location_level(LevelFilter::Off)
        .build();

    TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
