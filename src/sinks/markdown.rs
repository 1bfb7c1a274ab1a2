// sinks/markdown.rs
use crate::scraper::ListingRecord;
use crate::sinks::{ListingSink, SinkError};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Table header and the listing field shown under it.
pub const MARKDOWN_COLUMNS: [(&str, &str); 7] = [
    ("Property Type", "property_type"),
    ("Land Size", "land_size"),
    ("Rooms", "rooms"),
    ("Parking Spaces", "parking_spaces"),
    ("Building Size", "building_size"),
    ("Address", "address"),
    ("Price", "price"),
];

/// Collects listings and writes them as one Markdown table on `finish`.
pub struct MarkdownSink {
    path: PathBuf,
    records: Vec<ListingRecord>,
}

impl MarkdownSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn render(records: &[ListingRecord]) -> String {
        let mut out = String::from("# Real Estate Listings\n\n");

        let headers = MARKDOWN_COLUMNS.map(|(header, _)| header);
        let _ = writeln!(out, "| {} |", headers.join(" | "));
        let _ = writeln!(out, "| {} |", ["---"; MARKDOWN_COLUMNS.len()].join(" | "));

        for r in records {
            let cells = MARKDOWN_COLUMNS.map(|(_, field)| escape_cell(r.get(field).unwrap_or_default()));
            let _ = writeln!(out, "| {} |", cells.join(" | "));
        }

        out
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

impl ListingSink for MarkdownSink {
    fn write_page(&mut self, records: &[ListingRecord]) -> Result<(), SinkError> {
        self.records.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        std::fs::write(&self.path, Self::render(&self.records))?;
        info!(total = self.records.len(), path = %self.path.display(), "data written");
        Ok(())
    }
}
