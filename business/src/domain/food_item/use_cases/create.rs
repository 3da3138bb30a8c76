use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;

pub struct CreateFoodItemParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

#[async_trait]
pub trait CreateFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateFoodItemParams) -> Result<FoodItem, FoodItemError>;
}
