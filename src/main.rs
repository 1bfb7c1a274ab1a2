use crate::config::{Cli, Command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod errors;
mod forms;
mod prediction;
mod responses;
mod router;
mod scraper;
mod sinks;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Serve(args) => commands::serve(args),
        Command::ScrapePages(args) => commands::scrape_pages(args),
        Command::ScrapeSession(args) => commands::scrape_session(args),
    }
}
