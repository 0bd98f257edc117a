//! Biblio - interactive console for managing an in-memory bookstore.
//!
//! Menu:
//! 1. Add book
//! 2. Display books
//! 3. Record order transaction
//! 4. Record sale transaction
//! 5. Display transactions
//! 6. Exit

mod menu;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive bookstore management console
#[derive(Parser)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "biblio_store=debug,biblio_cli=debug"
    } else {
        "biblio_store=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = biblio_store::app_config::Config::load()?;
    tracing::debug!("Loaded config: {:?}", config);

    let output = output::Output::new(&config.store.currency);

    menu::run(&config, &output)
}
