use crate::cli::args::{parse_command_line, Args, Command};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::domain::config::DeviceConfig;
use crate::domain::error::{RelayCtlError, ValidationError};
use crate::domain::relay::{RelayRequest, RelayStatus};
use crate::infrastructure::http::{RelayClient, STATUS_PATH};
use std::process::ExitCode;
use tracing::debug;

/// How a command run ended, as seen by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Execute CLI command
///
/// Every failure is reported through the writer; the returned [`Outcome`] is
/// the only signal the caller gets. `Err` means the tool itself could not
/// run: the HTTP client could not be built or output could not be written.
pub async fn execute_command(args: Args, config: DeviceConfig) -> Result<Outcome, RelayCtlError> {
    let writer = ConsoleWriter::new(args.output);

    let command = match parse_command_line(args.words.as_slice()) {
        Ok(command) => command,
        Err(e @ ValidationError::RelayOutOfRange(_)) => {
            writer.write_error(&RelayCtlError::from(e).to_string())?;
            writer.write_message("Command failed!")?;
            return Ok(Outcome::Failure);
        }
        Err(e) => {
            writer.write_error(&e.to_string())?;
            writer.write_usage(&config)?;
            return Ok(match e {
                ValidationError::RelayNotInteger(_) => Outcome::Failure,
                _ => Outcome::Success,
            });
        }
    };
    debug!("Dispatching {:?} against {}", command, config.base_url());

    match command {
        Command::Usage => {
            writer.write_usage(&config)?;
            Ok(Outcome::Success)
        }
        Command::Status => {
            let client = RelayClient::new(config)?;
            // A failed status query is reported but does not fail the process
            show_status(&client, &writer).await?;
            Ok(Outcome::Success)
        }
        Command::SetRelay { relay, action } => {
            let client = RelayClient::new(config)?;
            execute_set_relay(&client, &writer, relay, &action).await
        }
    }
}

async fn execute_set_relay(
    client: &RelayClient,
    writer: &ConsoleWriter,
    relay: i64,
    action: &str,
) -> Result<Outcome, RelayCtlError> {
    writer.write_message(&format!("Target: Relay {} -> {}", relay, action.to_uppercase()))?;

    let result = match RelayRequest::new(relay, action) {
        Ok(request) => {
            writer.write_message(&format!("Sending request to: {}", client.url(&request.path())))?;
            client.send(&request).await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(body) => {
            writer.write_message(&format!("Success: {}", body))?;
            writer.write_message("Command completed successfully!")?;

            tokio::time::sleep(client.config().settle_delay()).await;
            writer.write_message(&format!("\n{}", "=".repeat(30)))?;
            show_status(client, writer).await?;

            Ok(Outcome::Success)
        }
        Err(e) => {
            writer.write_error(&e.to_string())?;
            writer.write_message("Command failed!")?;
            Ok(Outcome::Failure)
        }
    }
}

/// Query and print the relay states. `None` when the query failed.
pub async fn show_status(
    client: &RelayClient,
    writer: &impl OutputWriter,
) -> Result<Option<RelayStatus>, RelayCtlError> {
    writer.write_message(&format!("Getting status from: {}", client.url(STATUS_PATH)))?;

    match client.status().await {
        Ok(status) => {
            writer.write_status(&status)?;
            Ok(Some(status))
        }
        Err(e) => {
            debug!("Status query failed: {}", e);
            writer.write_error(&format!("Failed to get status: {}", e))?;
            Ok(None)
        }
    }
}
