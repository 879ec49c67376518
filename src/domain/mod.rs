// Domain module - Relay types, device configuration and errors
pub mod config;
pub mod error;
pub mod relay;

pub use config::DeviceConfig;
pub use error::{RelayCtlError, RelayCtlResult, ValidationError};
pub use relay::{RelayAction, RelayIndex, RelayRequest, RelayStatus};
