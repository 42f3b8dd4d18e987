//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use meow_norris::config::UpstreamConfig;
use meow_norris::{HttpServer, JokeClient, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Joke payload used across the end-to-end tests.
pub const DIVIDE_BY_ZERO: &str = r#"{"id":"x","value":"Chuck Norris can divide by zero.","categories":["dev"],"created_at":"t1","updated_at":"t1","icon_url":"https://example.invalid/i.png","url":"https://example.invalid/x"}"#;

/// Start a programmable mock upstream on an ephemeral port.
///
/// `f` receives the request target (path and query) and returns the status
/// code and JSON body to answer with.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let target = match read_request_target(&mut socket).await {
                            Some(target) => target,
                            None => return,
                        };
                        let (status, body) = f(target).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock upstream that always answers with the same status and body.
pub async fn start_mock_backend(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Start a mock upstream that accepts connections but never answers.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// An address with nothing listening on it.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Read the request head and return its target, e.g. `/jokes/random?category=dev`.
async fn read_request_target(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next()?;
    request_line.split_whitespace().nth(1).map(str::to_string)
}

/// A running service instance pointed at a mock upstream.
pub struct TestApp {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub http: reqwest::Client,
    pub client: Arc<JokeClient>,
    pub server: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http.get(self.url(path)).send().await.expect("Service unreachable")
    }

    /// Trigger shutdown and wait for the server task to return.
    pub async fn stop(&mut self) -> std::io::Result<()> {
        self.shutdown.trigger();
        match self.server.take() {
            Some(handle) => handle.await.expect("Server task panicked"),
            None => Ok(()),
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Upstream configuration pointing at `upstream` with a short timeout.
pub fn upstream_config(upstream: SocketAddr) -> UpstreamConfig {
    UpstreamConfig {
        base_url: format!("http://{}/jokes", upstream),
        timeout_secs: 1,
        ..UpstreamConfig::default()
    }
}

/// Start the service on an ephemeral port, proxying to `upstream`.
///
/// `http` keeps idle connections pooled so tests can hold a keep-alive
/// connection open across shutdown.
pub async fn spawn_app(upstream: SocketAddr) -> TestApp {
    let client = Arc::new(JokeClient::new(&upstream_config(upstream)).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(client.clone());
    let server = tokio::spawn(server.run(listener, shutdown.clone()));

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let http = reqwest::Client::builder().no_proxy().build().unwrap();

    TestApp {
        addr,
        shutdown,
        http,
        client,
        server: Some(server),
    }
}
