//! pgprobe Entry Point

use clap::Parser;
use pgprobe::cli::Cli;
use pgprobe::config::RunConfig;
use pgprobe::logging;
use pgprobe::poller::Poller;
use pgprobe::report::StdoutSink;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let config = RunConfig::from(cli);
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    let poller = Poller::new(config);
    let mut sink = StdoutSink;

    if let Err(e) = poller.run(&mut sink).await {
        error!(error = %e, "Diagnostic run aborted");
        std::process::exit(1);
    }
}
