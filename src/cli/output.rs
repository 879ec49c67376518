use crate::cli::args::OutputFormat;
use crate::domain::config::DeviceConfig;
use crate::domain::relay::{state_label, RelayStatus};
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_status(&self, status: &RelayStatus) -> Result<(), OutputError>;
    fn write_usage(&self, config: &DeviceConfig) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::RelayCtlError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_status(&self, status: &RelayStatus) -> Result<(), OutputError> {
        let rendered = render_status(status, self.format)?;
        writeln!(io::stdout().lock(), "{}", rendered)?;
        Ok(())
    }

    fn write_usage(&self, config: &DeviceConfig) -> Result<(), OutputError> {
        writeln!(io::stdout().lock(), "{}", usage_text(config))?;
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
            }
            _ => {
                writeln!(stdout, "{}", message)?;
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        let mut stderr = io::stderr().lock();
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                writeln!(stderr, "{}", serde_json::to_string_pretty(&output)?)?;
            }
            _ => {
                writeln!(stderr, "Error: {}", error)?;
            }
        }
        Ok(())
    }
}

/// Table row for relay status
#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "Relay")]
    relay: u8,
    #[tabled(rename = "State")]
    state: &'static str,
}

/// Render a relay status listing in the requested format.
pub fn render_status(status: &RelayStatus, format: OutputFormat) -> Result<String, OutputError> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut lines = vec!["Current Relay Status:".to_string()];
            for (index, on) in status.iter() {
                lines.push(format!("  Relay {}: {}", index, state_label(on)));
            }
            lines.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(status)?,
        OutputFormat::Table => {
            let rows: Vec<StatusTableRow> = status
                .iter()
                .map(|(index, on)| StatusTableRow {
                    relay: index.get(),
                    state: state_label(on),
                })
                .collect();
            Table::new(rows).to_string()
        }
    };
    Ok(rendered)
}

/// Usage text, including the address of the configured device.
pub fn usage_text(config: &DeviceConfig) -> String {
    let name = env!("CARGO_PKG_NAME");
    let rule = "=".repeat(40);
    format!(
        "\nESP32 Relay Control\n\
         {rule}\n\
         Usage:\n  \
         {name} [OPTIONS] <relay_num> <action>\n  \
         {name} [OPTIONS] status\n\
         \n\
         Arguments:\n  \
         relay_num: 1, 2, 3, or 4\n  \
         action:    start or stop\n\
         \n\
         Options:\n  \
         -v, --verbose          Enable verbose logging\n  \
         -q, --quiet            Suppress logging\n  \
         -o, --output <FORMAT>  Status output format: text, json, table\n  \
         -V, --version          Print version\n\
         \n\
         Examples:\n  \
         {name} 1 start    # Turn ON relay 1\n  \
         {name} 2 stop     # Turn OFF relay 2\n  \
         {name} status     # Show all relay states\n\
         \n\
         ESP32 IP: {host}\n",
        host = config.host,
    )
}
