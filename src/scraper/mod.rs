mod accumulator;
mod extract;
mod fetcher;
mod models;
mod pagination;
mod scraper_error;
mod session;
mod static_pages;

pub use accumulator::SettlePolicy;
pub use extract::{ListingSelectors, SelectorConfig};
pub use fetcher::{PageFetcher, RetryPolicy};
pub use models::ListingRecord;
pub use pagination::PaginationDriver;
pub use scraper_error::ScraperError;
pub use session::HttpSession;
pub use static_pages::StaticPages;
