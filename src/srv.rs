use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::errors::LookupError;

/// One candidate returned by an SRV lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvTarget {
    pub target: String,
}

impl SrvTarget {
    /// Builds a target from a DNS name, dropping the absolute-name trailing
    /// dot. The root name `.` becomes empty.
    pub fn from_dns_name(name: &str) -> Self {
        Self {
            target: name.strip_suffix('.').unwrap_or(name).to_string(),
        }
    }
}

/// Service discovery backend. Targets come back in the order the backend
/// produced them.
#[async_trait]
pub trait SrvLookup {
    async fn lookup_srv(&self, name: &str) -> Result<Vec<SrvTarget>, LookupError>;
}

/// SRV lookup against the system DNS configuration.
///
/// The resolver is built per lookup, so a broken resolv.conf only surfaces
/// when a fallback is actually needed.
#[derive(Debug, Clone, Default)]
pub struct DnsSrvLookup {
    timeout: Option<Duration>,
}

impl DnsSrvLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the per-query timeout from the system configuration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn resolver(&self) -> Result<TokioAsyncResolver, LookupError> {
        let (config, mut opts) = read_system_conf()?;
        if let Some(timeout) = self.timeout {
            opts.timeout = timeout;
        }

        Ok(TokioAsyncResolver::tokio(config, opts))
    }
}

#[async_trait]
impl SrvLookup for DnsSrvLookup {
    async fn lookup_srv(&self, name: &str) -> Result<Vec<SrvTarget>, LookupError> {
        let resolver = self.resolver()?;
        let lookup = resolver.srv_lookup(name).await?;

        Ok(lookup
            .iter()
            .map(|srv| SrvTarget::from_dns_name(&srv.target().to_utf8()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_dot() {
        assert_eq!(SrvTarget::from_dns_name("node1.example.").target, "node1.example");
        assert_eq!(SrvTarget::from_dns_name("node1.example").target, "node1.example");
    }

    #[test]
    fn root_name_is_empty() {
        assert_eq!(SrvTarget::from_dns_name(".").target, "");
    }
}
