use anyhow::Context;

use crate::opts::Opts;
use crate::probe::TcpConnector;
use crate::resolve_addr::Resolver;
use crate::srv::DnsSrvLookup;

pub async fn start(opts: &Opts) -> anyhow::Result<String> {
    let req = opts.request()?;
    let lookup_timeout = opts.lookup_timeout()?;

    let mut srv = DnsSrvLookup::new();
    if let Some(timeout) = lookup_timeout {
        srv = srv.with_timeout(timeout);
    }

    let resolver = Resolver::new(TcpConnector, srv);
    let addr = resolver.resolve(&req).await.with_context(|| {
        format!(
            "Failed to resolve address '{}' with port '{}'",
            req.host(),
            req.port()
        )
    })?;

    tracing::debug!(addr = %addr, "resolved");
    Ok(addr)
}
