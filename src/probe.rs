use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;

/// Checks whether `host:port` accepts a TCP connection within `timeout`.
///
/// Implementations must not hold on to an established connection: a probe
/// only answers "reachable right now".
#[async_trait]
pub trait Connector {
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> io::Result<()> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "connection timed out"))??;

        drop(stream);
        Ok(())
    }
}
