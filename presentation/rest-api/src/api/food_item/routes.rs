use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::food_item::use_cases::create::{CreateFoodItemParams, CreateFoodItemUseCase};
use business::domain::food_item::use_cases::delete::{DeleteFoodItemParams, DeleteFoodItemUseCase};
use business::domain::food_item::use_cases::get_all::GetAllFoodItemsUseCase;
use business::domain::food_item::use_cases::get_by_id::{
    GetFoodItemByIdParams, GetFoodItemByIdUseCase,
};
use business::domain::shared::value_objects::ItemId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_identifier};
use crate::api::food_item::dto::{CreateFoodItemRequest, FoodItemResponse};
use crate::api::tags::ApiTags;

pub struct FoodItemApi {
    create_use_case: Arc<dyn CreateFoodItemUseCase>,
    get_all_use_case: Arc<dyn GetAllFoodItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetFoodItemByIdUseCase>,
    delete_use_case: Arc<dyn DeleteFoodItemUseCase>,
}

impl FoodItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFoodItemUseCase>,
        get_all_use_case: Arc<dyn GetAllFoodItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetFoodItemByIdUseCase>,
        delete_use_case: Arc<dyn DeleteFoodItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// Food catalog API
///
/// Endpoints for managing the dishes offered on the storefront.
#[OpenApi]
impl FoodItemApi {
    /// List all food items
    ///
    /// Returns the whole catalog ordered by creation date.
    #[oai(path = "/food-items", method = "get", tag = "ApiTags::FoodItems")]
    async fn get_all(&self) -> GetAllFoodItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<FoodItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetAllFoodItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllFoodItemsResponse::InternalError(json)
            }
        }
    }

    /// Create a food item
    #[oai(path = "/food-items", method = "post", tag = "ApiTags::FoodItems")]
    async fn create(&self, body: Json<CreateFoodItemRequest>) -> CreateFoodItemResponse {
        let params = CreateFoodItemParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            image: body.0.image,
            category: body.0.category,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateFoodItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFoodItemResponse::BadRequest(json),
                    409 => CreateFoodItemResponse::Conflict(json),
                    _ => CreateFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a food item by id
    #[oai(path = "/food-items/:id", method = "get", tag = "ApiTags::FoodItems")]
    async fn get_by_id(&self, id: Path<String>) -> GetFoodItemResponse {
        let id = match ItemId::parse(&id.0) {
            Ok(id) => id,
            Err(e) => return GetFoodItemResponse::BadRequest(invalid_identifier("food_item", "id", &e)),
        };

        match self
            .get_by_id_use_case
            .execute(GetFoodItemByIdParams { id })
            .await
        {
            Ok(item) => GetFoodItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFoodItemResponse::NotFound(json),
                    _ => GetFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a food item
    ///
    /// Carts that still hold the item keep their quantity; the item simply
    /// stops contributing to cart totals.
    #[oai(path = "/food-items/:id", method = "delete", tag = "ApiTags::FoodItems")]
    async fn delete(&self, id: Path<String>) -> DeleteFoodItemResponse {
        let id = match ItemId::parse(&id.0) {
            Ok(id) => id,
            Err(e) => {
                return DeleteFoodItemResponse::BadRequest(invalid_identifier("food_item", "id", &e));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteFoodItemParams { id })
            .await
        {
            Ok(()) => DeleteFoodItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteFoodItemResponse::NotFound(json),
                    _ => DeleteFoodItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllFoodItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFoodItemResponse {
    #[oai(status = 201)]
    Created(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFoodItemResponse {
    #[oai(status = 200)]
    Ok(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFoodItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
