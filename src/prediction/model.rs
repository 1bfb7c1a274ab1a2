// prediction/model.rs
use crate::errors::ArtifactError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("expected {expected} features, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("model produced a non-finite estimate")]
    NonFinite,
}

/// A pre-trained regression model: maps a fixed-length feature vector to a price.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictError>;

    /// Number of features the model was trained on.
    fn input_len(&self) -> usize;
}

/// Linear regression exported as `{"intercept": f64, "coefficients": [f64...]}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
            path: display,
            source,
        })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictError::WrongLength {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let y = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();

        if y.is_finite() {
            Ok(y)
        } else {
            Err(PredictError::NonFinite)
        }
    }

    fn input_len(&self) -> usize {
        self.coefficients.len()
    }
}
