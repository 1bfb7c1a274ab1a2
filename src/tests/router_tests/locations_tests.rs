// src/tests/router_tests/locations_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_json, request, test_state};
use http::Method;

#[test]
fn lists_locations_in_catalog_order() {
    let state = test_state();
    let mut resp = handle(request(Method::GET, "/get_location_names", ""), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let json = body_json(&mut resp);
    assert_eq!(
        json,
        serde_json::json!({ "locations": ["1st phase jp nagar", "indira nagar"] })
    );
}

#[test]
fn health_reports_column_count() {
    let state = test_state();
    let mut resp = handle(request(Method::GET, "/health", ""), &state).unwrap();
    let json = body_json(&mut resp);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["columns"], 5);
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state();
    let err = handle(request(Method::GET, "/predict", ""), &state).err().unwrap();
    assert_eq!(err.status(), 404);
}
