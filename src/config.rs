// config.rs
use crate::scraper::{RetryPolicy, SettlePolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const LISTINGS_URL: &str = "https://www.realtor.com/international/mx/tijuana-baja-california/p";

#[derive(Debug, Parser)]
#[command(name = "home_price", version, about = "Home price estimates and listing scrapers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the price prediction API.
    Serve(ServeArgs),
    /// Scrape a fixed range of numbered result pages.
    ScrapePages(ScrapePagesArgs),
    /// Scrape by following each page's "next" control until the last page.
    ScrapeSession(ScrapeSessionArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, env = "HOME_PRICE_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    /// Directory holding columns.json and model.json.
    #[arg(long, env = "HOME_PRICE_ARTIFACTS", default_value = "./artifacts")]
    pub artifacts: PathBuf,

    #[arg(long, default_value_t = 8)]
    pub workers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Md,
    Csv,
    Xlsx,
}

#[derive(Debug, Args)]
pub struct ScrapePagesArgs {
    /// Results page URL with `{}` where the page number goes.
    #[arg(long, default_value_t = format!("{LISTINGS_URL}{{}}"))]
    pub url_template: String,

    /// Last page number to fetch, starting from 1.
    #[arg(long, default_value_t = 4)]
    pub pages: usize,

    /// Pause between page fetches.
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    #[arg(long, short, default_value = "real_estate_listings.md")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    pub format: OutputFormat,
}

impl ScrapePagesArgs {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Args)]
pub struct ScrapeSessionArgs {
    #[arg(long, default_value_t = format!("{LISTINGS_URL}1"))]
    pub start_url: String,

    #[arg(long, short, default_value = "house_posts.csv")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Unique listings expected on a full page.
    #[arg(long, default_value_t = 25)]
    pub target_count: usize,

    /// Reads of one page before settling for what it has.
    #[arg(long, default_value_t = 10)]
    pub max_attempts: u32,

    #[arg(long, default_value_t = 1000)]
    pub settle_ms: u64,

    #[arg(long, default_value_t = 500)]
    pub retry_ms: u64,

    /// Attempts per HTTP fetch.
    #[arg(long, default_value_t = 3)]
    pub fetch_attempts: u32,

    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Delete the output file before starting.
    #[arg(long)]
    pub fresh: bool,
}

impl ScrapeSessionArgs {
    pub fn settle_policy(&self) -> SettlePolicy {
        SettlePolicy {
            target_count: self.target_count,
            max_attempts: self.max_attempts,
            settle_delay: Duration::from_millis(self.settle_ms),
            retry_delay: Duration::from_millis(self.retry_ms),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.fetch_attempts,
            ..RetryPolicy::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_match_listing_site_pagination() {
        let cli = Cli::try_parse_from(["home_price", "scrape-session"]).unwrap();
        let Command::ScrapeSession(args) = cli.command else {
            panic!("expected scrape-session");
        };

        assert_eq!(args.settle_policy(), SettlePolicy::default());
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.start_url.ends_with("/p1"));
        assert!(!args.fresh);
    }

    #[test]
    fn pages_template_has_placeholder() {
        let cli = Cli::try_parse_from(["home_price", "scrape-pages", "--pages", "2"]).unwrap();
        let Command::ScrapePages(args) = cli.command else {
            panic!("expected scrape-pages");
        };

        assert_eq!(args.pages, 2);
        assert!(args.url_template.ends_with("/p{}"));
        assert_eq!(args.delay(), Duration::from_secs(1));
    }

    #[test]
    fn serve_parses_address() {
        let cli = Cli::try_parse_from([
            "home_price",
            "serve",
            "--addr",
            "0.0.0.0:8080",
            "--artifacts",
            "/srv/artifacts",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };

        assert_eq!(args.addr.port(), 8080);
        assert_eq!(args.artifacts, PathBuf::from("/srv/artifacts"));
    }
}
