// src/tests/router_tests/predict_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_json, request, test_state};
use http::Method;

fn predict(body: &str) -> serde_json::Value {
    let state = test_state();
    let mut resp = handle(request(Method::POST, "/predict_home_price", body), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 200);
    body_json(&mut resp)
}

#[test]
fn known_location_moves_the_estimate() {
    let json = predict("total_sqft=1000&number_bedrooms=2&location=Indira+Nagar&bath=2");
    assert_eq!(json["estimated_price"], 160.25);

    let json = predict("total_sqft=1000&number_bedrooms=2&location=1st+phase+jp+nagar&bath=2");
    assert_eq!(json["estimated_price"], 100.25);
}

#[test]
fn unknown_location_falls_back_silently() {
    let json = predict("total_sqft=1000&number_bedrooms=2&location=Kalhalli&bath=2");
    assert_eq!(json["estimated_price"], 60.25);
}

#[test]
fn estimate_is_rounded_to_cents() {
    // 0.25 + 2 + 3 + 16.6665
    let json = predict("total_sqft=333.33&number_bedrooms=1&location=nowhere&bath=1");
    assert_eq!(json["estimated_price"], 21.92);
}

#[test]
fn malformed_fields_are_bad_requests() {
    let state = test_state();

    for body in [
        "total_sqft=big&number_bedrooms=2&location=x&bath=2",
        "total_sqft=1000&number_bedrooms=-1&location=x&bath=2",
        "total_sqft=1000&number_bedrooms=2&location=x",
        "",
    ] {
        let err = handle(request(Method::POST, "/predict_home_price", body), &state).err().unwrap();
        assert_eq!(err.status(), 400, "body {body:?}");
    }
}

#[test]
fn oversized_body_is_rejected_not_truncated() {
    let state = test_state();
    // a valid form followed by enough padding to pass the size limit
    let body = format!(
        "total_sqft=1000&number_bedrooms=2&location=x&bath=2&pad={}",
        "a".repeat(64 * 1024)
    );

    let err = handle(request(Method::POST, "/predict_home_price", &body), &state).err().unwrap();
    assert_eq!(err.status(), 400);
}

#[test]
fn body_at_the_size_limit_is_accepted() {
    let prefix = "total_sqft=1000&number_bedrooms=2&location=Kalhalli&bath=2&pad=";
    let body = format!("{prefix}{}", "a".repeat(64 * 1024 - prefix.len()));

    let json = predict(&body);
    assert_eq!(json["estimated_price"], 60.25);
}

#[test]
fn get_is_not_allowed_on_predict() {
    let state = test_state();
    let err = handle(request(Method::GET, "/predict_home_price", ""), &state).err().unwrap();
    assert_eq!(err.status(), 405);
}
