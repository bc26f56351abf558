//! Application handlers
//!
//! The single write endpoint: adoption application intake.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{ApplicationId, NewApplication};
use crate::error::AppError;
use crate::AppState;

/// Request body for an adoption application
///
/// Every field is optional and unknown fields are ignored; the form on the
/// site is the only place input is checked. Field types are coerced rather
/// than enforced: `"1"` is a pet id, `13800000000` is a phone number, and
/// values that cannot be coerced are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub pet_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub applicant_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

impl From<CreateApplicationRequest> for NewApplication {
    fn from(request: CreateApplicationRequest) -> Self {
        NewApplication {
            pet_id: request.pet_id,
            applicant_name: request.applicant_name,
            email: request.email,
            phone: request.phone,
            message: request.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateApplicationResponse {
    pub id: ApplicationId,
}

/// POST /api/applications
///
/// Store the application and echo its assigned id.
pub async fn create_application(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<CreateApplicationResponse>, AppError> {
    // Only the outer shape is checked: anything but a JSON object is a 400
    let Json(fields) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request: CreateApplicationRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let application = state.application_service.submit(request.into()).await?;

    Ok(Json(CreateApplicationResponse { id: application.id }))
}
