mod catalog;
mod encoder;
mod estimator;
mod model;

pub use catalog::{ColumnCatalog, FIXED_FEATURES};
pub use encoder::encode;
pub use estimator::AppState;
pub use model::{LinearModel, PredictError, Predictor};
