use crate::domain::{
    config::DeviceConfig,
    error::{RelayCtlError, RelayCtlResult},
    relay::{RelayRequest, RelayStatus},
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

pub const STATUS_PATH: &str = "/status";

/// Slack between the connect deadline and the overall request deadline.
const CONNECT_GRACE: Duration = Duration::from_millis(250);

/// HTTP client for the relay board
pub struct RelayClient {
    client: Client,
    config: DeviceConfig,
}

impl RelayClient {
    pub fn new(config: DeviceConfig) -> RelayCtlResult<Self> {
        // The overall deadline trails the connect deadline, so a handshake that
        // never completes is reported as a connect failure and not a timeout.
        let client = Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout() + CONNECT_GRACE)
            .build()
            .map_err(|e| RelayCtlError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Switch a relay on or off.
    ///
    /// The relay number and action are validated first; invalid input returns
    /// [`RelayCtlError::Validation`] without opening a connection. On HTTP 200
    /// the response body is returned as text.
    pub async fn set_relay(&self, relay: i64, action: &str) -> RelayCtlResult<String> {
        let request = RelayRequest::new(relay, action)?;
        self.send(&request).await
    }

    /// Send an already validated relay command.
    pub async fn send(&self, request: &RelayRequest) -> RelayCtlResult<String> {
        let url = self.url(&request.path());
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!("POST {} -> {}", url, status);

        if status != StatusCode::OK {
            debug!("Relay {} {} rejected with HTTP {}", request.index, request.action, status);
            return Err(RelayCtlError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        info!("Relay {} switched: {}", request.index, request.action);
        Ok(body)
    }

    /// Fetch the state of all four relays.
    pub async fn status(&self) -> RelayCtlResult<RelayStatus> {
        let url = self.url(STATUS_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if status != StatusCode::OK {
            let body = response.text().await.map_err(|e| self.classify(e))?;
            return Err(RelayCtlError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<RelayStatus>()
            .await
            .map_err(|e| self.classify(e))
    }

    fn classify(&self, err: reqwest::Error) -> RelayCtlError {
        debug!("Request to {} failed: {:?}", self.config.base_url(), err);

        // A connect timeout is both; the connect failure wins
        if err.is_connect() {
            RelayCtlError::Connectivity {
                address: self.config.host.clone(),
            }
        } else if err.is_timeout() {
            RelayCtlError::Timeout {
                timeout: self.config.timeout(),
            }
        } else if err.is_decode() {
            RelayCtlError::Parse(err.to_string())
        } else {
            RelayCtlError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_follow_config() {
        let client = RelayClient::new(DeviceConfig::new("10.0.0.7", 8080)).unwrap();
        assert_eq!(client.url(STATUS_PATH), "http://10.0.0.7:8080/status");

        let request = RelayRequest::new(2, "Start").unwrap();
        assert_eq!(client.url(&request.path()), "http://10.0.0.7:8080/relay2/start");
    }

    #[tokio::test]
    async fn test_invalid_input_never_connects() {
        // Port 9 on the loopback is never served in the test environment, but
        // validation must fail before a connection is attempted anyway.
        let client = RelayClient::new(DeviceConfig::new("127.0.0.1", 9)).unwrap();

        let err = client.set_relay(0, "start").await.unwrap_err();
        assert!(err.is_validation());

        let err = client.set_relay(1, "toggle").await.unwrap_err();
        assert!(err.is_validation());
    }
}
