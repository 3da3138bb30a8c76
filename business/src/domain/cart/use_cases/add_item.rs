use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::{ItemId, SessionId};

pub struct AddToCartParams {
    pub session_id: SessionId,
    pub item_id: ItemId,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    /// Returns the item's quantity after the add.
    async fn execute(&self, params: AddToCartParams) -> Result<u32, CartError>;
}
