use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::storefront::errors::StorefrontError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StorefrontError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            StorefrontError::InvalidBaseUrl => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ConfigurationError",
                "storefront.invalid_base_url",
            ),
            StorefrontError::InvalidImageReference => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "storefront.invalid_image_reference",
            ),
            StorefrontError::Repository(_) => (
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
