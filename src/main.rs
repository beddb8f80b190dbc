//! box - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nestbox::cli::{Cli, Commands};

/// Log filter variable, e.g. `BOX_LOG=debug`.
const LOG_ENV: &str = "BOX_LOG";

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => commands::completions::handle::<Cli>(shell),
        Some(Commands::Docs { format }) => commands::docs::handle(format),
        None => commands::draw::handle::<Cli>(&cli.draw),
    }
}

/// Logs go to stderr so they never end up inside the drawn output.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
