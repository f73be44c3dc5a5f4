use std::time::Duration;

use crate::errors::{InvalidInput, ProbeFailure, ResolveError};
use crate::probe::{Connector, TcpConnector};
use crate::srv::{DnsSrvLookup, SrvLookup};

/// A validated request to find a reachable address for `host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    host: String,
    port: u16,
    timeout: Duration,
}

impl ResolutionRequest {
    pub fn new(host: impl Into<String>, port: i64, timeout_secs: i64) -> Result<Self, InvalidInput> {
        let host = host.into();
        if host.is_empty() {
            return Err(InvalidInput::EmptyAddress);
        }

        let port = u16::try_from(port)
            .ok()
            .filter(|port| *port > 0)
            .ok_or(InvalidInput::InvalidPort)?;

        let timeout_secs = u64::try_from(timeout_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(InvalidInput::InvalidTimeout)?;

        Ok(Self {
            host,
            port,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Finds a reachable address: the host itself first, then its SRV targets
/// in the order the lookup returned them.
pub struct Resolver<C = TcpConnector, L = DnsSrvLookup> {
    connector: C,
    srv: L,
}

impl<C, L> Resolver<C, L>
where
    C: Connector + Sync,
    L: SrvLookup + Sync,
{
    pub fn new(connector: C, srv: L) -> Self {
        Self { connector, srv }
    }

    pub async fn resolve(&self, req: &ResolutionRequest) -> Result<String, ResolveError> {
        let host = req.host();

        match self.connector.probe(host, req.port, req.timeout).await {
            Ok(()) => return Ok(host.to_string()),
            Err(err) => tracing::debug!(host, port = req.port, err = %err, "direct_probe_failed"),
        }

        let targets = self
            .srv
            .lookup_srv(host)
            .await
            .map_err(|cause| ResolveError::LookupFailed {
                host: host.to_string(),
                cause,
            })?;

        if targets.is_empty() {
            return Err(ResolveError::NoRecordsFound {
                host: host.to_string(),
            });
        }

        let mut attempts = Vec::new();
        for srv in targets.into_iter().filter(|srv| !srv.target.is_empty()) {
            match self.connector.probe(&srv.target, req.port, req.timeout).await {
                Ok(()) => return Ok(srv.target),
                Err(err) => {
                    tracing::debug!(srv_target = %srv.target, port = req.port, err = %err, "srv_target_probe_failed");
                    attempts.push(ProbeFailure {
                        target: srv.target,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Err(ResolveError::NoReachableAlternative {
            host: host.to_string(),
            attempts,
        })
    }
}
