mod csv_file;
mod markdown;
mod xlsx;

pub use csv_file::CsvSink;
pub use markdown::MarkdownSink;
pub use xlsx::XlsxSink;

use crate::scraper::ListingRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Destination for scraped listings, fed one page at a time.
pub trait ListingSink {
    fn write_page(&mut self, records: &[ListingRecord]) -> Result<(), SinkError>;

    /// Flush everything to disk. Called once after the last page.
    fn finish(&mut self) -> Result<(), SinkError>;
}
