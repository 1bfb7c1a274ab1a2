use crate::prediction::{AppState, ColumnCatalog, LinearModel};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// State over a two-location catalog with hand-picked coefficients.
pub fn test_state() -> AppState {
    let catalog = ColumnCatalog::new(
        ["bath", "bhk", "total_sqft", "1st phase jp nagar", "indira nagar"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
    .unwrap_or_else(|e| panic!("catalog: {e}"));

    let model = LinearModel {
        intercept: 0.25,
        coefficients: vec![2.0, 3.0, 0.05, 40.0, 100.0],
    };

    AppState::new(catalog, Box::new(model)).unwrap_or_else(|e| panic!("state: {e}"))
}

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_json(resp: &mut Response) -> serde_json::Value {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("body {body:?} is not JSON: {e}"))
}
