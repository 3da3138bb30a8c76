use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::SessionId;
use business::domain::storefront::use_cases::render::{
    RenderStorefrontParams, RenderStorefrontUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_identifier};
use crate::api::storefront::dto::ItemViewResponse;
use crate::api::tags::ApiTags;

pub struct StorefrontApi {
    render_use_case: Arc<dyn RenderStorefrontUseCase>,
}

impl StorefrontApi {
    pub fn new(render_use_case: Arc<dyn RenderStorefrontUseCase>) -> Self {
        Self { render_use_case }
    }
}

#[OpenApi]
impl StorefrontApi {
    /// Render the storefront for a session
    ///
    /// Returns one card per catalog item. Items absent from the session's cart
    /// carry an `add` control; items in the cart carry a `stepper` with the quantity.
    #[oai(path = "/storefront/:session_id", method = "get", tag = "ApiTags::Storefront")]
    async fn render(&self, session_id: Path<String>) -> RenderStorefrontResponse {
        let session_id = match SessionId::parse(&session_id.0) {
            Ok(session_id) => session_id,
            Err(e) => {
                return RenderStorefrontResponse::BadRequest(invalid_identifier(
                    "storefront",
                    "session_id",
                    &e,
                ));
            }
        };

        match self
            .render_use_case
            .execute(RenderStorefrontParams { session_id })
            .await
        {
            Ok(views) => {
                RenderStorefrontResponse::Ok(Json(views.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RenderStorefrontResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RenderStorefrontResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemViewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
