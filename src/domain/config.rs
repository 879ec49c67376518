use std::time::Duration;

/// Address of the relay board compiled into the binary.
pub const DEFAULT_HOST: &str = "192.168.1.11";
pub const DEFAULT_PORT: u16 = 80;

/// Device endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Device host name or IP address
    pub host: String,
    /// Device HTTP port
    pub port: u16,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Pause between a successful relay command and the follow-up status query
    pub settle_delay_ms: u64,
}

impl DeviceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// `http://host:port`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

// Default value functions
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout() -> u64 {
    5000
}

fn default_settle_delay() -> u64 {
    500
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_ms: default_timeout(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}
