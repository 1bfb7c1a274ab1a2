// sinks/csv_file.rs
use crate::scraper::ListingRecord;
use crate::sinks::{ListingSink, SinkError};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 8] = [
    "address",
    "property_type",
    "parking_spaces",
    "land_size",
    "building_size",
    "num_bedrooms",
    "num_bathrooms",
    "price",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    address: &'a str,
    property_type: &'a str,
    parking_spaces: &'a str,
    land_size: &'a str,
    building_size: &'a str,
    num_bedrooms: &'a str,
    num_bathrooms: &'a str,
    price: &'a str,
}

impl<'a> From<&'a ListingRecord> for CsvRow<'a> {
    fn from(r: &'a ListingRecord) -> Self {
        Self {
            address: &r.address,
            property_type: &r.property_type,
            parking_spaces: &r.parking_spaces,
            land_size: &r.land_size,
            building_size: &r.building_size,
            num_bedrooms: &r.num_bedrooms,
            num_bathrooms: &r.num_bathrooms,
            price: &r.price,
        }
    }
}

/// Appends listings to a CSV file. The header row is written only when the
/// file is new or empty, so repeated runs keep extending one table.
pub struct CsvSink {
    path: PathBuf,
    writer: csv::Writer<File>,
    written: usize,
}

impl CsvSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let needs_header = std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
        }

        Ok(Self {
            path,
            writer,
            written: 0,
        })
    }

    /// Remove `path` if it exists, so the next [`CsvSink::open`] starts fresh.
    pub fn reset(path: impl AsRef<Path>) -> Result<(), SinkError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ListingSink for CsvSink {
    fn write_page(&mut self, records: &[ListingRecord]) -> Result<(), SinkError> {
        for record in records {
            self.writer.serialize(CsvRow::from(record))?;
        }
        self.writer.flush()?;
        self.written += records.len();

        info!(count = records.len(), path = %self.path.display(), "saved records");
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        info!(total = self.written, path = %self.path.display(), "csv complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, price: &str) -> ListingRecord {
        ListingRecord {
            address: address.to_string(),
            property_type: "Casa".to_string(),
            num_bedrooms: "3".to_string(),
            price: price.to_string(),
            ..ListingRecord::default()
        }
    }

    #[test]
    fn header_is_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house_posts.csv");

        let mut sink = CsvSink::open(&path).unwrap();
        sink.write_page(&[record("Calle 1", "$100")]).unwrap();
        sink.finish().unwrap();

        let mut sink = CsvSink::open(&path).unwrap();
        sink.write_page(&[record("Calle 2, Tijuana", "$200")]).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "address,property_type,parking_spaces,land_size,building_size,num_bedrooms,num_bathrooms,price",
                "Calle 1,Casa,,,,3,,$100",
                "\"Calle 2, Tijuana\",Casa,,,,3,,$200",
            ]
        );
    }

    #[test]
    fn reset_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house_posts.csv");
        CsvSink::reset(&path).unwrap();

        std::fs::write(&path, "old").unwrap();
        CsvSink::reset(&path).unwrap();
        assert!(!path.exists());
    }
}
