use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_by_id::{
    GetFoodItemByIdParams, GetFoodItemByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetFoodItemByIdUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFoodItemByIdUseCase for GetFoodItemByIdUseCaseImpl {
    async fn execute(&self, params: GetFoodItemByIdParams) -> Result<FoodItem, FoodItemError> {
        self.logger
            .info(&format!("Fetching food item by id: {}", params.id));

        let item = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodItemError::NotFound,
                other => FoodItemError::Repository(other),
            })?;

        Ok(item)
    }
}
