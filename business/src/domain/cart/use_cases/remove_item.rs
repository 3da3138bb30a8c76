use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartEntry;
use crate::domain::shared::value_objects::{ItemId, SessionId};

pub struct RemoveFromCartParams {
    pub session_id: SessionId,
    pub item_id: ItemId,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartEntry, CartError>;
}
