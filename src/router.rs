use crate::errors::ServerError;
use crate::forms::PredictForm;
use crate::prediction::AppState;
use crate::responses::{json_response, preflight_response, ResultResp};
use astra::Request;
use serde::Serialize;
use std::io::Read;
use tracing::{debug, warn};

/// Upper bound on form bodies; a prediction form is a few dozen bytes.
const MAX_FORM_BYTES: u64 = 64 * 1024;

#[derive(Serialize)]
struct LocationsBody<'a> {
    locations: &'a [String],
}

#[derive(Serialize)]
struct EstimateBody {
    estimated_price: f64,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    columns: usize,
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/get_location_names") => json_response(&LocationsBody {
            locations: state.location_names(),
        }),
        ("POST", "/predict_home_price") => {
            let body = read_body(&mut req)?;
            let form = PredictForm::parse(&body)?;

            let estimated_price = state
                .estimate_price(form.bath, form.number_bedrooms, form.total_sqft, &form.location)
                .map_err(|e| {
                    warn!(error = %e, "prediction failed");
                    ServerError::Prediction(e.to_string())
                })?;

            json_response(&EstimateBody { estimated_price })
        }
        ("GET", "/health") => json_response(&HealthBody {
            status: "ok",
            columns: state.catalog().len(),
        }),
        ("OPTIONS", "/get_location_names") | ("OPTIONS", "/predict_home_price") => {
            preflight_response()
        }
        (_, "/get_location_names") | (_, "/predict_home_price") | (_, "/health") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let unreadable = |e: std::io::Error| ServerError::BadRequest(format!("unreadable body: {e}"));

    let mut reader = req.body_mut().reader();
    let mut body = String::new();
    reader
        .by_ref()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(unreadable)?;

    let mut rest = [0u8; 1];
    if reader.read(&mut rest).map_err(unreadable)? > 0 {
        return Err(ServerError::BadRequest(format!(
            "form body exceeds {MAX_FORM_BYTES} bytes"
        )));
    }
    Ok(body)
}
