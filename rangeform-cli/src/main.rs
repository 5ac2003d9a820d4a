mod cli;
mod commands;
mod config;
mod error;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::cli::Cli;
use crate::config::CliConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);

    if let Err(e) = logging::init(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    let mut out = io::stdout().lock();
    match commands::run(&cli.command, &config, &mut out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            if config.log_file.is_some() {
                error!("{}", e);
            }
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
