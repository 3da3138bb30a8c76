use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::Repository(RepositoryError::CapacityExceeded) => (
                StatusCode::CONFLICT,
                "Conflict",
                "cart.capacity_exceeded",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
