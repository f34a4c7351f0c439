//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use weather_proxy::{HttpServer, ProxyConfig, Shutdown};

/// Start a mock upstream that returns a fixed status and JSON body.
pub async fn start_upstream(addr: SocketAddr, status: u16, body: &'static str) {
    start_programmable_upstream(addr, move |_target| async move {
        (status, body.to_string())
    })
    .await;
}

/// Start a programmable mock upstream.
///
/// The closure receives the request target (path + query) and returns the
/// status and body to answer with.
#[allow(dead_code)]
pub async fn start_programmable_upstream<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let head = String::from_utf8_lossy(&buf[..n]).to_string();
                        let target = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let (status, body) = f(target).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            401 => "401 Unauthorized",
                            403 => "403 Forbidden",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Config wired to a local mock upstream, API key set.
pub fn test_config(proxy_addr: SocketAddr, upstream_addr: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = proxy_addr.to_string();
    config.upstream.base_url = format!("http://{}/v1/forecast.json", upstream_addr);
    config.upstream.api_key = Some("test-key".to_string());
    config
}

/// Spawn the proxy on `addr`. The listener is bound before this returns,
/// so requests can be issued immediately.
pub async fn start_proxy(addr: SocketAddr, config: ProxyConfig) -> Shutdown {
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let listener = TcpListener::bind(addr).await.unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    shutdown
}

/// Client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
