// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{parse_command_line, Args, Command, OutputFormat};
pub use commands::{execute_command, Outcome};
pub use output::OutputWriter;
