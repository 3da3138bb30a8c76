use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;
use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::view::ItemView;

pub struct RenderStorefrontParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait RenderStorefrontUseCase: Send + Sync {
    /// Renders every catalog item with the control matching the session's cart.
    async fn execute(&self, params: RenderStorefrontParams)
    -> Result<Vec<ItemView>, StorefrontError>;
}
