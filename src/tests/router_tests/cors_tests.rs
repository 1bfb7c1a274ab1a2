// src/tests/router_tests/cors_tests.rs
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, request, test_state};
use http::Method;

fn allow_origin(resp: &astra::Response) -> Option<&str> {
    resp.headers()
        .get("Access-Control-Allow-Origin")
        .and_then(|v| v.to_str().ok())
}

#[test]
fn responses_are_open_to_any_origin() {
    let state = test_state();

    let locations = handle(request(Method::GET, "/get_location_names", ""), &state).unwrap();
    assert_eq!(allow_origin(&locations), Some("*"));

    let estimate = handle(
        request(
            Method::POST,
            "/predict_home_price",
            "total_sqft=1000&number_bedrooms=2&location=x&bath=2",
        ),
        &state,
    )
    .unwrap();
    assert_eq!(allow_origin(&estimate), Some("*"));
}

#[test]
fn preflight_lists_allowed_methods() {
    let state = test_state();
    let resp = handle(request(Method::OPTIONS, "/predict_home_price", ""), &state).unwrap();

    assert_eq!(resp.status(), 204);
    assert_eq!(allow_origin(&resp), Some("*"));
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Methods")
            .and_then(|v| v.to_str().ok()),
        Some("GET, POST, OPTIONS")
    );
}

#[test]
fn error_responses_carry_status_and_cors() {
    let mut resp = error_to_response(ServerError::BadRequest("missing field 'bath'".into()));

    assert_eq!(resp.status(), 400);
    assert_eq!(allow_origin(&resp), Some("*"));
    assert_eq!(
        body_json(&mut resp)["error"],
        "Bad Request: missing field 'bath'"
    );
}
