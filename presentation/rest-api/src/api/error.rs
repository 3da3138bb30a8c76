use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::value_objects::IdentifierError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the 400 body for a malformed path identifier, e.g. `cart.invalid_session_id`.
pub fn invalid_identifier(prefix: &str, field: &str, error: &IdentifierError) -> Json<ErrorResponse> {
    tracing::debug!("Rejected {prefix} {field}: {error}");
    ErrorResponse::validation(&format!("{prefix}.invalid_{field}"))
}
