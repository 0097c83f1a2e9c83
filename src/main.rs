mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

// Re-export from lib for internal use
use osis_confmaker::error;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("osis_confmaker={}", cli.log_level()).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = cli::generate(&cli) {
        tracing::error!("{}", e);
        return Err(e).with_context(|| format!("Cannot create a conf for {}", cli.osis.display()));
    }

    Ok(())
}
