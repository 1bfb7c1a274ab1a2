// errors.rs
use thiserror::Error;

/// Errors originating from the request layer (routing, form parsing)
/// or the prediction call behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Prediction failed: {0}")]
    Prediction(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::Prediction(_) | ServerError::InternalError => 500,
        }
    }
}

/// Failures while loading the persisted column catalog or model.
/// Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("column catalog needs at least 3 columns, found {0}")]
    TooFewColumns(usize),
    #[error("model expects {model} features but the catalog has {catalog} columns")]
    ShapeMismatch { model: usize, catalog: usize },
}
