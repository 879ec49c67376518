// Infrastructure module - External dependencies and adapters
pub mod http;
pub mod logging;
