// prediction/catalog.rs
use crate::errors::ArtifactError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Number of leading numeric columns: bath, bedrooms, total area.
pub const FIXED_FEATURES: usize = 3;

#[derive(Debug, Deserialize)]
struct ColumnsDocument {
    data_columns: Vec<String>,
}

/// Ordered column names defining the feature vector layout.
///
/// The first [`FIXED_FEATURES`] entries are the numeric features, every
/// entry after that is a location with its own one-hot slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCatalog {
    columns: Vec<String>,
}

impl ColumnCatalog {
    pub fn new(columns: Vec<String>) -> Result<Self, ArtifactError> {
        if columns.len() < FIXED_FEATURES {
            return Err(ArtifactError::TooFewColumns(columns.len()));
        }
        Ok(Self { columns })
    }

    /// Load the catalog from a `{"data_columns": [...]}` document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: display.clone(),
            source,
        })?;
        let doc: ColumnsDocument =
            serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
                path: display,
                source,
            })?;

        Self::new(doc.data_columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Location names in one-hot slot order.
    pub fn locations(&self) -> &[String] {
        &self.columns[FIXED_FEATURES..]
    }

    /// Column index of a location, matched exactly after lower-casing the input.
    pub fn location_index(&self, location: &str) -> Option<usize> {
        let wanted = location.to_lowercase();
        self.locations()
            .iter()
            .position(|name| *name == wanted)
            .map(|i| i + FIXED_FEATURES)
    }
}
