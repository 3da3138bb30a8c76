use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ItemId;

use super::model::FoodItem;

#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FoodItem>, RepositoryError>;
    async fn get_by_id(&self, id: &ItemId) -> Result<FoodItem, RepositoryError>;
    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when nothing was deleted.
    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError>;
}
