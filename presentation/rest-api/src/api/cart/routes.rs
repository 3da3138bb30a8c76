use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveFromCartParams, RemoveFromCartUseCase,
};
use business::domain::shared::value_objects::{ItemId, SessionId};

use crate::api::cart::dto::{CartQuantityResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_identifier};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_use_case,
            clear_use_case,
        }
    }
}

fn parse_session(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    SessionId::parse(raw).map_err(|e| invalid_identifier("cart", "session_id", &e))
}

fn parse_line(session: &str, item: &str) -> Result<(SessionId, ItemId), Json<ErrorResponse>> {
    let session_id = parse_session(session)?;
    let item_id = ItemId::parse(item).map_err(|e| invalid_identifier("cart", "item_id", &e))?;
    Ok((session_id, item_id))
}

/// Shopping cart API
///
/// One cart per session, held in memory by the server.
#[OpenApi]
impl CartApi {
    /// Get a session's cart
    ///
    /// Returns every line priced against the current catalog plus the total amount.
    #[oai(path = "/carts/:session_id", method = "get", tag = "ApiTags::Carts")]
    async fn get(&self, session_id: Path<String>) -> GetCartResponse {
        let session = match parse_session(&session_id.0) {
            Ok(session) => session,
            Err(json) => return GetCartResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetCartParams {
                session_id: session.clone(),
            })
            .await
        {
            Ok(summary) => GetCartResponse::Ok(Json(CartResponse::from_summary(
                session.to_string(),
                summary,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Clear a session's cart
    #[oai(path = "/carts/:session_id", method = "delete", tag = "ApiTags::Carts")]
    async fn clear(&self, session_id: Path<String>) -> ClearCartResponse {
        let session = match parse_session(&session_id.0) {
            Ok(session) => session,
            Err(json) => return ClearCartResponse::BadRequest(json),
        };

        match self
            .clear_use_case
            .execute(ClearCartParams {
                session_id: session,
            })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }

    /// Add one unit of an item
    ///
    /// Starts the item at 1 when it is not yet in the cart. Returns 409 when
    /// the cart or the cart store is full.
    #[oai(
        path = "/carts/:session_id/items/:item_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(
        &self,
        session_id: Path<String>,
        item_id: Path<String>,
    ) -> CartQuantityChangeResponse {
        let (session_id, item_id) = match parse_line(&session_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return CartQuantityChangeResponse::BadRequest(json),
        };

        match self
            .add_use_case
            .execute(AddToCartParams {
                session_id,
                item_id: item_id.clone(),
            })
            .await
        {
            Ok(quantity) => CartQuantityChangeResponse::Ok(Json(CartQuantityResponse {
                item_id: item_id.to_string(),
                quantity,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => CartQuantityChangeResponse::Conflict(json),
                    _ => CartQuantityChangeResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove one unit of an item
    ///
    /// The item leaves the cart when its last unit is removed. Removing an
    /// item that is not in the cart changes nothing.
    #[oai(
        path = "/carts/:session_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(
        &self,
        session_id: Path<String>,
        item_id: Path<String>,
    ) -> CartQuantityChangeResponse {
        let (session_id, item_id) = match parse_line(&session_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return CartQuantityChangeResponse::BadRequest(json),
        };

        match self
            .remove_use_case
            .execute(RemoveFromCartParams {
                session_id,
                item_id: item_id.clone(),
            })
            .await
        {
            Ok(entry) => CartQuantityChangeResponse::Ok(Json(CartQuantityResponse {
                item_id: item_id.to_string(),
                quantity: entry.quantity(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartQuantityChangeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartQuantityChangeResponse {
    #[oai(status = 200)]
    Ok(Json<CartQuantityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
