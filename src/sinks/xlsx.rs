// sinks/xlsx.rs
use crate::scraper::ListingRecord;
use crate::sinks::{ListingSink, SinkError};
use rust_xlsxwriter::{Format, Workbook};
use std::path::PathBuf;
use tracing::info;

const COLUMNS: [(&str, &str); 9] = [
    ("Address", "address"),
    ("Property Type", "property_type"),
    ("Price", "price"),
    ("Bedrooms", "num_bedrooms"),
    ("Bathrooms", "num_bathrooms"),
    ("Rooms", "rooms"),
    ("Parking Spaces", "parking_spaces"),
    ("Land Size", "land_size"),
    ("Building Size", "building_size"),
];

/// Collects listings and saves them as a single-sheet workbook on `finish`.
pub struct XlsxSink {
    path: PathBuf,
    records: Vec<ListingRecord>,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn build_workbook(records: &[ListingRecord]) -> Result<Workbook, SinkError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();

        for (col, (header, _)) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (i, r) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, (_, field)) in COLUMNS.iter().enumerate() {
                worksheet.write_string(row, col as u16, r.get(field).unwrap_or_default())?;
            }
        }

        Ok(workbook)
    }
}

impl ListingSink for XlsxSink {
    fn write_page(&mut self, records: &[ListingRecord]) -> Result<(), SinkError> {
        self.records.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        let mut workbook = Self::build_workbook(&self.records)?;
        workbook.save(&self.path)?;
        info!(total = self.records.len(), path = %self.path.display(), "workbook saved");
        Ok(())
    }
}
