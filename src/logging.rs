use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target for the one message that reports why the process is exiting.
/// It is enabled at `error` no matter what filter the user supplies.
pub const FATAL_TARGET: &str = "srvprobe::fatal";

/// Builds the filter. `RUST_LOG` wins over `level`; an unparsable filter
/// falls back to `info`.
pub fn filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match format!("{FATAL_TARGET}=error").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs a stderr subscriber. Colours only when stderr is a terminal.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}
