use std::time::Duration;
use thiserror::Error;

/// Rejected user input. Raised before anything touches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Relay number must be 1-4, got {0}")]
    RelayOutOfRange(String),

    #[error("Action must be 'start' or 'stop', got '{0}'")]
    UnknownAction(String),

    #[error("Relay number must be an integer, got '{0}'")]
    RelayNotInteger(String),

    #[error("Wrong number of arguments ({0})")]
    WrongArgumentCount(usize),
}

/// RelayCtl unified error type
#[derive(Error, Debug)]
pub enum RelayCtlError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "Cannot connect to device at {address}\n\
         Check if:\n  \
         - the device is powered on\n  \
         - the Ethernet cable is connected\n  \
         - the IP address is correct"
    )]
    Connectivity { address: String },

    #[error("Request timeout after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },

    #[error("HTTP {status}\nResponse: {body}")]
    Remote { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid status response: {0}")]
    Parse(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl RelayCtlError {
    /// True for input errors that never reached the device.
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayCtlError::Validation(_))
    }
}

pub type RelayCtlResult<T> = Result<T, RelayCtlError>;
