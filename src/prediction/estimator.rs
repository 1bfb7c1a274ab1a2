// prediction/estimator.rs
use crate::errors::ArtifactError;
use crate::prediction::{encode, ColumnCatalog, LinearModel, PredictError, Predictor};
use std::path::Path;
use tracing::info;

pub const COLUMNS_FILE: &str = "columns.json";
pub const MODEL_FILE: &str = "model.json";

/// Read-only state shared by every request handler.
/// Built once at startup, never mutated afterwards.
pub struct AppState {
    catalog: ColumnCatalog,
    model: Box<dyn Predictor>,
}

impl AppState {
    pub fn new(catalog: ColumnCatalog, model: Box<dyn Predictor>) -> Result<Self, ArtifactError> {
        if model.input_len() != catalog.len() {
            return Err(ArtifactError::ShapeMismatch {
                model: model.input_len(),
                catalog: catalog.len(),
            });
        }
        Ok(Self { catalog, model })
    }

    /// Load `columns.json` and `model.json` from the artifacts directory.
    pub fn load(artifacts_dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let dir = artifacts_dir.as_ref();
        info!(dir = %dir.display(), "loading saved artifacts");

        let catalog = ColumnCatalog::load(dir.join(COLUMNS_FILE))?;
        let model = LinearModel::load(dir.join(MODEL_FILE))?;
        let state = Self::new(catalog, Box::new(model))?;

        info!(
            columns = state.catalog.len(),
            locations = state.catalog.locations().len(),
            "artifacts loaded"
        );
        Ok(state)
    }

    pub fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    pub fn location_names(&self) -> &[String] {
        self.catalog.locations()
    }

    /// Estimated price for one home, rounded to 2 decimal places.
    pub fn estimate_price(
        &self,
        bath: u32,
        bedrooms: u32,
        total_sqft: f64,
        location: &str,
    ) -> Result<f64, PredictError> {
        let x = encode(
            &self.catalog,
            f64::from(bath),
            f64::from(bedrooms),
            total_sqft,
            location,
        );
        let price = round_price(self.model.predict(&x)?);
        if !price.is_finite() {
            return Err(PredictError::NonFinite);
        }
        Ok(price)
    }
}

/// Two decimal places, halves to even.
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
