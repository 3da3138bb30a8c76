use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food_item::errors::FoodItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FoodItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.name_empty",
            ),
            FoodItemError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.invalid_price",
            ),
            FoodItemError::ImageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.image_empty",
            ),
            FoodItemError::InvalidImage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.invalid_image",
            ),
            FoodItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "food_item.not_found"),
            FoodItemError::AlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "food_item.already_exists",
            ),
            FoodItemError::Repository(_) => (
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

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = FoodItemError::InvalidPrice.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "food_item.invalid_price");
    }

    #[test]
    fn should_map_invalid_image_to_bad_request() {
        let (status, json) = FoodItemError::InvalidImage.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "food_item.invalid_image");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = FoodItemError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            FoodItemError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
