use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Navigation failed: {0}")]
    Navigation(String),
    #[error("Config error: {0}")]
    Config(String),
}
