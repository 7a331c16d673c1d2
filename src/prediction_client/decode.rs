//! Turns a raw HTTP response into a `PredictionResult`.
//!
//! Acceptance is two-staged: the body must be a JSON object carrying both
//! `actions` and `caption`, and those fields must then decode into the typed
//! result. Failing either stage is a schema mismatch. A field counts as
//! missing when it is absent, `null`, `false`, `0` or an empty string.

use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::PredictionResult;
use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 2] = ["actions", "caption"];

pub fn decode_response(status: u16, body: &str) -> Result<PredictionResult, PredictError> {
    if !(200..300).contains(&status) {
        return Err(PredictError::HttpStatus(status));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| PredictError::InvalidBody(e.to_string()))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| value.get(field).map_or(true, is_blank))
        .collect();

    if !missing.is_empty() {
        return Err(PredictError::SchemaMismatch {
            detail: format!("missing {}", missing.join(", ")),
            body: value.to_string(),
        });
    }

    serde_json::from_value(value.clone()).map_err(|e| PredictError::SchemaMismatch {
        detail: e.to_string(),
        body: value.to_string(),
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
