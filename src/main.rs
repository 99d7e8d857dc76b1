//! Slackline stream inspector.
//!
//! Decodes newline-delimited event payloads from stdin and writes one JSON
//! report per payload to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use slackline::{Config, Inspector, Quarantine};
use slackline_core::Decoder;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.rust_log)?;

    info!(
        max_payload_bytes = config.max_payload_bytes,
        quarantine_path = ?config.quarantine_path,
        "Starting slackline stream inspector"
    );

    let mut inspector = Inspector::new(Decoder::new(config.to_decoder_config()));
    if let Some(path) = &config.quarantine_path {
        let quarantine = Quarantine::open(path).await?;
        info!(path = %quarantine.path().display(), "Quarantining unknown events");
        inspector = inspector.with_quarantine(quarantine);
    }

    let summary = inspector.run(BufReader::new(stdin()), stdout(), shutdown_signal()).await?;

    info!(
        decoded = summary.decoded,
        unknown = summary.unknown,
        failed = summary.failed,
        total = summary.total(),
        "Inspection complete"
    );
    Ok(())
}

/// Initializes tracing on stderr, keeping stdout for reports.
fn init_tracing(default_filter: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Invalid log filter")?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C signal");
        },
        () = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
