//! Runtime configuration

use std::path::PathBuf;

use log::LevelFilter;

use crate::cli::Cli;

/// Settings shared by every command.
///
/// # Example
///
/// ```ignore
/// let config = CliConfig::default()
///     .with_log_level(LevelFilter::Debug)
///     .with_pretty(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Maximum log level.
    ///
    /// Default: warn
    pub log_level: LevelFilter,

    /// Log destination; stderr when unset.
    pub log_file: Option<PathBuf>,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            log_file: None,
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Builds the config from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::default()
            .with_log_level(level_for(cli.verbose))
            .with_pretty(cli.pretty);
        match &cli.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        }
    }

    /// Sets the log level.
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Sets the log file.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Sets pretty output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rangeform", "schema"]).unwrap();
        assert_eq!(CliConfig::from_cli(&cli), CliConfig::default());
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["rangeform", "--log-file", "out.log", "-vvvv", "schema"]).unwrap();
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.log_file, Some(PathBuf::from("out.log")));
        assert!(!config.pretty);
    }
}
