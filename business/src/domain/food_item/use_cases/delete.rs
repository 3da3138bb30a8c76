use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::shared::value_objects::ItemId;

pub struct DeleteFoodItemParams {
    pub id: ItemId,
}

#[async_trait]
pub trait DeleteFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFoodItemParams) -> Result<(), FoodItemError>;
}
