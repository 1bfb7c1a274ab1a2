// forms.rs
use crate::errors::ServerError;
use std::collections::HashMap;
use std::str::FromStr;

/// Fields of a `POST /predict_home_price` form.
#[derive(Debug, PartialEq)]
pub struct PredictForm {
    pub total_sqft: f64,
    pub number_bedrooms: u32,
    pub location: String,
    pub bath: u32,
}

impl PredictForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &str) -> Result<Self, ServerError> {
        // a repeated key keeps its first value
        let mut fields: HashMap<String, String> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()).into_owned() {
            fields.entry(key).or_insert(value);
        }

        let total_sqft: f64 = parse_field(&fields, "total_sqft")?;
        if !total_sqft.is_finite() || total_sqft < 0.0 {
            return Err(ServerError::BadRequest(format!(
                "total_sqft must be a non-negative number, got {total_sqft}"
            )));
        }

        Ok(Self {
            total_sqft,
            number_bedrooms: parse_field(&fields, "number_bedrooms")?,
            location: required(&fields, "location")?.to_string(),
            bath: parse_field(&fields, "bath")?,
        })
    }
}

fn required<'a>(fields: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest(format!("missing field '{name}'")))
}

fn parse_field<T: FromStr>(fields: &HashMap<String, String>, name: &str) -> Result<T, ServerError> {
    let raw = required(fields, name)?;
    raw.trim()
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid value for '{name}': {raw:?}")))
}
