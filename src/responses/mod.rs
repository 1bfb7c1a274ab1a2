pub mod errors;
pub mod json;

pub use errors::{error_to_response, ResultResp};
pub use json::{json_response, preflight_response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
