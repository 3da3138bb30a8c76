use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;

#[async_trait]
pub trait GetAllFoodItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FoodItem>, FoodItemError>;
}
