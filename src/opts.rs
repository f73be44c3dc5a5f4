use std::time::Duration;

use clap::Parser;

use crate::errors::InvalidInput;
use crate::resolve_addr::ResolutionRequest;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "srvprobe", about = "Resolve a reachable address, falling back to SRV targets", long_about = None)]
pub struct Opts {
    /// Address to resolve
    #[arg(long, default_value = "")]
    pub addr: String,

    /// Port to connect
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub port: i64,

    /// Timeout seconds for connection attempt
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub timeoutsec: i64,

    /// Timeout seconds for each SRV query; the system resolver default applies when unset
    #[arg(long, allow_negative_numbers = true)]
    pub lookup_timeout_sec: Option<i64>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Opts {
    pub fn request(&self) -> Result<ResolutionRequest, InvalidInput> {
        ResolutionRequest::new(self.addr.as_str(), self.port, self.timeoutsec)
    }

    pub fn lookup_timeout(&self) -> Result<Option<Duration>, InvalidInput> {
        match self.lookup_timeout_sec {
            None => Ok(None),
            Some(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs as u64))),
            Some(_) => Err(InvalidInput::InvalidLookupTimeout),
        }
    }
}
