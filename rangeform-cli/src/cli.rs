//! Command-line arguments

use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(name = "rangeform", version, about = "Validate date range form records")]
pub struct Cli {
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a whole record read from FILE, or stdin when omitted.
    Validate {
        file: Option<PathBuf>,
    },
    /// Validate a single field value. VALUE is parsed as JSON, falling back
    /// to a plain string.
    Field {
        name: String,
        value: String,
    },
    /// Print the form fields and their types.
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_with_globals() {
        let cli = Cli::try_parse_from(["rangeform", "validate", "form.json", "-vv", "--pretty"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Validate { file: Some(_) }));
    }

    #[test]
    fn test_parse_field() {
        let cli = Cli::try_parse_from(["rangeform", "field", "startDate", "not-a-date"]).unwrap();
        let Command::Field { name, value } = cli.command else {
            panic!("expected field command");
        };
        assert_eq!(name, "startDate");
        assert_eq!(value, "not-a-date");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["rangeform"]).is_err());
    }
}
