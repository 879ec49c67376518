//! RelayCtl Library
//!
//! Command-line control of an ESP32 four-channel relay board through its
//! plain HTTP API: switch a relay with `POST /relay{n}/{start|stop}` and read
//! all four states with `GET /status`.

pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{RelayCtlError, RelayCtlResult, ValidationError};
pub use domain::config::DeviceConfig;
pub use domain::relay::{RelayAction, RelayIndex, RelayRequest, RelayStatus};
pub use infrastructure::http::RelayClient;
