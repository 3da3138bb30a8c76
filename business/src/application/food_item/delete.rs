use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::delete::{DeleteFoodItemParams, DeleteFoodItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFoodItemUseCase for DeleteFoodItemUseCaseImpl {
    async fn execute(&self, params: DeleteFoodItemParams) -> Result<(), FoodItemError> {
        self.logger
            .info(&format!("Deleting food item: {}", params.id));

        self.repository
            .delete(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodItemError::NotFound,
                other => FoodItemError::Repository(other),
            })?;

        self.logger.info(&format!("Food item deleted: {}", params.id));
        Ok(())
    }
}
