//! CLI entry point for poster stylization and style profiling

use clap::Parser;
use inkposter::io::cli::{Cli, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> inkposter::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkposter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}
