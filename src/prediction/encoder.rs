// prediction/encoder.rs
use crate::prediction::{ColumnCatalog, FIXED_FEATURES};
use tracing::debug;

/// Model input laid out as the catalog's columns.
pub type FeatureVector = Vec<f64>;

/// Build the feature vector for one request.
///
/// Slots 0..3 hold bath count, bedroom count and total area. Each remaining
/// slot is the one-hot bit for a catalog location. A location the catalog does
/// not know leaves every location slot at 0.0.
pub fn encode(
    catalog: &ColumnCatalog,
    bath: f64,
    bedrooms: f64,
    total_area: f64,
    location: &str,
) -> FeatureVector {
    let mut x = vec![0.0; catalog.len()];
    x[..FIXED_FEATURES].copy_from_slice(&[bath, bedrooms, total_area]);

    match catalog.location_index(location) {
        Some(i) => x[i] = 1.0,
        None => debug!(location, "unknown location, no one-hot slot set"),
    }

    x
}
