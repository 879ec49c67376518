// Mock relay board serving canned HTTP responses
#![allow(dead_code)]

use relayctl::DeviceConfig;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::task::JoinHandle;

/// How the mock answers every request
#[derive(Debug, Clone)]
pub enum Reply {
    Respond { status: u16, body: String },
    /// Accept the connection and never answer
    Hang,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Respond {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Reply::Respond {
            status,
            body: body.to_string(),
        }
    }
}

pub struct MockDevice {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockDevice {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock device");
        let addr = listener.local_addr().expect("Failed to get local address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let reply = reply.clone();
                tokio::spawn(async move {
                    handle_connection(stream, reply, recorded).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Client configuration pointing at this mock, with short timings.
    pub fn config(&self) -> DeviceConfig {
        DeviceConfig::new(self.addr.ip().to_string(), self.addr.port())
            .with_timeout(Duration::from_millis(300))
            .with_settle_delay(Duration::ZERO)
    }

    /// Request lines seen so far, as `METHOD /path`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A configuration whose port refuses connections.
pub fn unreachable_config() -> DeviceConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to get local address").port();
    drop(listener);

    DeviceConfig::new("127.0.0.1", port)
        .with_timeout(Duration::from_millis(300))
        .with_settle_delay(Duration::ZERO)
}

/// A listener that never accepts, with its backlog already full.
///
/// Further connection attempts stall in the handshake.
pub struct StalledDevice {
    addr: SocketAddr,
    _listener: TcpListener,
    _backlog: Vec<TcpStream>,
}

impl StalledDevice {
    pub async fn start() -> Self {
        let socket = TcpSocket::new_v4().expect("Failed to create socket");
        socket
            .bind("127.0.0.1:0".parse().expect("Invalid address"))
            .expect("Failed to bind stalled device");
        let listener = socket.listen(0).expect("Failed to listen");
        let addr = listener.local_addr().expect("Failed to get local address");

        let mut backlog = Vec::new();
        for _ in 0..16 {
            match tokio::time::timeout(Duration::from_millis(100), TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => backlog.push(stream),
                _ => break,
            }
        }

        Self {
            addr,
            _listener: listener,
            _backlog: backlog,
        }
    }

    pub fn config(&self) -> DeviceConfig {
        DeviceConfig::new(self.addr.ip().to_string(), self.addr.port())
            .with_timeout(Duration::from_millis(300))
            .with_settle_delay(Duration::ZERO)
    }
}

async fn handle_connection(mut stream: TcpStream, reply: Reply, recorded: Arc<Mutex<Vec<String>>>) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => {
                buffer.extend_from_slice(&chunk[..n]);
                if buffer.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }

    let head = String::from_utf8_lossy(&buffer);
    let request_line: Vec<&str> = head
        .lines()
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .take(2)
        .collect();
    recorded.lock().unwrap().push(request_line.join(" "));

    match reply {
        Reply::Respond { status, body } => {
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}
