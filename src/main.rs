// RelayCtl - ESP32 relay board control over HTTP
use clap::Parser;
use relayctl::cli::{execute_command, Args};
use relayctl::infrastructure::logging::init_logging;
use relayctl::DeviceConfig;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if !args.quiet {
        if let Err(e) = init_logging(args.verbose) {
            eprintln!("Warning: failed to initialize logging: {}", e);
        }
    }

    match execute_command(args, DeviceConfig::default()).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
