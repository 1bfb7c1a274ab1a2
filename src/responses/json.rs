use crate::errors::ServerError;
use crate::responses::{ResultResp, ALLOW_METHODS, ALLOW_ORIGIN};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as a 200 JSON response, open to any origin.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Answer a CORS preflight request.
pub fn preflight_response() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
