//! Command implementations

use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::process::ExitCode;

use log::info;
use rangeform_lib::model::{FormField, FormInput, FormRecord, Value};
use rangeform_lib::validation::{field_errors, form_schema, validate_field};
use serde::Serialize;

use crate::cli::Command;
use crate::config::CliConfig;
use crate::error::CliError;

/// Verdict of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

/// Runs a command, writing its result to `out`.
pub fn run(command: &Command, config: &CliConfig, out: &mut impl Write) -> Result<Outcome, CliError> {
    match command {
        Command::Validate { file: Some(path) } => {
            info!("Validating record from {}", path.display());
            validate(File::open(path)?, config, out)
        }
        Command::Validate { file: None } => {
            info!("Validating record from stdin");
            validate(io::stdin().lock(), config, out)
        }
        Command::Field { name, value } => field(name, value, out),
        Command::Schema => {
            write_json(out, &form_schema().descriptors(), config)?;
            Ok(Outcome::Valid)
        }
    }
}

/// Validates a JSON record. Prints the typed record or the field error map.
pub fn validate(mut reader: impl Read, config: &CliConfig, out: &mut impl Write) -> Result<Outcome, CliError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let input: FormInput = serde_json::from_str(&raw)?;

    match FormRecord::parse(&input) {
        Ok(record) => {
            write_json(out, &record, config)?;
            Ok(Outcome::Valid)
        }
        Err(failure) => {
            info!("Record rejected with {} issue(s)", failure.issues.len());
            write_json(out, &field_errors(&failure), config)?;
            Ok(Outcome::Invalid)
        }
    }
}

/// Validates a single field value and prints its message, or `ok`.
pub fn field(name: &str, raw: &str, out: &mut impl Write) -> Result<Outcome, CliError> {
    let field: FormField = name.parse()?;
    let value: Value = serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw));

    match validate_field(field, &value) {
        Some(message) => {
            writeln!(out, "{}", message)?;
            Ok(Outcome::Invalid)
        }
        None => {
            writeln!(out, "ok")?;
            Ok(Outcome::Valid)
        }
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, config: &CliConfig) -> Result<(), CliError> {
    if config.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
