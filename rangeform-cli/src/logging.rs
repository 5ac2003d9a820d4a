//! Logger setup

use std::fs::File;

use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::config::CliConfig;
use crate::error::CliError;

/// Installs the global logger. Logs go to stderr so stdout stays JSON.
pub fn init(config: &CliConfig) -> Result<(), CliError> {
    match &config.log_file {
        Some(path) => {
            let log_file = File::create(path)?;
            WriteLogger::init(config.log_level, Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(
                config.log_level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}
