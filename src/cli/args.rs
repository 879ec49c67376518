use crate::domain::error::ValidationError;
use clap::{Parser, ValueEnum};
use std::num::IntErrorKind;

/// Command line arguments for RelayCtl
///
/// clap only handles the global options. The command words are collected raw
/// and dispatched by [`parse_command_line`], which also owns `-h`/`--help`.
#[derive(Parser, Debug)]
#[command(
    name = "relayctl",
    version = env!("CARGO_PKG_VERSION"),
    about = "Control the relays of an ESP32 relay board over HTTP",
    disable_help_flag = true
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for the relay status listing
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// `<relay_num> <action>`, `status`, or `help`
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        num_args = 0..
    )]
    pub words: Vec<String>,
}

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and stop
    Usage,
    /// Query and print all relay states
    Status,
    /// Switch one relay; range and action are checked by the client
    SetRelay { relay: i64, action: String },
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];

/// Map the raw command words onto a [`Command`].
pub fn parse_command_line<S: AsRef<str>>(words: &[S]) -> Result<Command, ValidationError> {
    let first = match words.first() {
        Some(first) => first.as_ref(),
        None => return Ok(Command::Usage),
    };

    if HELP_TOKENS.contains(&first) {
        return Ok(Command::Usage);
    }

    if words.len() == 1 && first.eq_ignore_ascii_case("status") {
        return Ok(Command::Status);
    }

    if words.len() != 2 {
        return Err(ValidationError::WrongArgumentCount(words.len()));
    }

    let relay = first.trim().parse::<i64>().map_err(|e| match e.kind() {
        // Still a whole number, just never a relay
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValidationError::RelayOutOfRange(first.trim().to_string())
        }
        _ => ValidationError::RelayNotInteger(first.to_string()),
    })?;

    Ok(Command::SetRelay {
        relay,
        action: words[1].as_ref().to_string(),
    })
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
