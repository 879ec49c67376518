// HTTP module - Relay board HTTP API client
pub mod client;

pub use client::{RelayClient, STATUS_PATH};
