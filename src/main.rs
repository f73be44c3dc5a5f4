use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use srvprobe_lib::{app, logging, opts};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let opts = opts::Opts::parse();
    logging::init(&opts.log_level);

    let addr = match app::start(&opts).await {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(target: logging::FATAL_TARGET, "{:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(err) = stdout.write_all(addr.as_bytes()).and_then(|_| stdout.flush()) {
        tracing::error!(target: logging::FATAL_TARGET, err = ?err, "stdout_write_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
