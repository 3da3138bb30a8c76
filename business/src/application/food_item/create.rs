use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::create::{CreateFoodItemParams, CreateFoodItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFoodItemUseCase for CreateFoodItemUseCaseImpl {
    async fn execute(&self, params: CreateFoodItemParams) -> Result<FoodItem, FoodItemError> {
        self.logger
            .info(&format!("Creating food item: {}", params.name));

        let item = FoodItem::new(NewFoodItemProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
            category: params.category,
        })?;

        self.repository.save(&item).await.map_err(|e| match e {
            RepositoryError::Duplicated => FoodItemError::AlreadyExists,
            other => FoodItemError::Repository(other),
        })?;

        self.logger.info(&format!("Food item created: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ItemId;
    use mockall::mock;

    mock! {
        pub FoodItemRepo {}

        #[async_trait]
        impl FoodItemRepository for FoodItemRepo {
            async fn get_all(&self) -> Result<Vec<FoodItem>, RepositoryError>;
            async fn get_by_id(&self, id: &ItemId) -> Result<FoodItem, RepositoryError>;
            async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: &str, price: f64) -> CreateFoodItemParams {
        CreateFoodItemParams {
            name: name.to_string(),
            description: "Food provides essential nutrients".to_string(),
            price,
            image: "food_1.png".to_string(),
            category: "Salad".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_food_item_when_valid() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save()
            .withf(|item| item.name == "Greek salad")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Greek salad", 12.0)).await;

        let item = result.unwrap();
        assert_eq!(item.name, "Greek salad");
        assert_eq!(item.price, 12.0);
    }

    #[tokio::test]
    async fn should_reject_invalid_price_without_saving() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_save().times(0);

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Greek salad", -3.0)).await;

        assert!(matches!(result.unwrap_err(), FoodItemError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_map_duplicate_to_already_exists() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Greek salad", 12.0)).await;

        assert!(matches!(result.unwrap_err(), FoodItemError::AlreadyExists));
    }
}
