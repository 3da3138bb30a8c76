use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemId, SessionId};

use super::model::{Cart, CartEntry};

/// Holds one cart per session. Each mutation is applied atomically.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the session's cart, empty if the session has none yet.
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
    async fn add(
        &self,
        session_id: &SessionId,
        item_id: &ItemId,
    ) -> Result<NonZeroU32, RepositoryError>;
    async fn remove(
        &self,
        session_id: &SessionId,
        item_id: &ItemId,
    ) -> Result<CartEntry, RepositoryError>;
    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
