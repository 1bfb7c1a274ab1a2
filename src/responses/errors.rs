use crate::errors::ServerError;
use crate::responses::ALLOW_ORIGIN;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a JSON error response.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let body = json!({ "error": err.to_string() }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
