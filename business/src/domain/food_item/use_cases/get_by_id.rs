use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;
use crate::domain::shared::value_objects::ItemId;

pub struct GetFoodItemByIdParams {
    pub id: ItemId,
}

#[async_trait]
pub trait GetFoodItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetFoodItemByIdParams) -> Result<FoodItem, FoodItemError>;
}
