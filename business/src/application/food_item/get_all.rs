use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_all::GetAllFoodItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFoodItemsUseCase for GetAllFoodItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<FoodItem>, FoodItemError> {
        self.logger.info("Fetching all food items");

        let items = self.repository.get_all().await?;

        self.logger
            .debug(&format!("Fetched {} food items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ItemId;
    use chrono::Utc;
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

    #[tokio::test]
    async fn should_return_all_food_items() {
        let now = Utc::now();
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                FoodItem::from_repository(
                    ItemId::new("1"),
                    "Greek salad".to_string(),
                    String::new(),
                    12.0,
                    "food_1.png".to_string(),
                    "Salad".to_string(),
                    now,
                    now,
                ),
                FoodItem::from_repository(
                    ItemId::new("2"),
                    "Lasagna Rolls".to_string(),
                    String::new(),
                    14.0,
                    "food_5.png".to_string(),
                    "Rolls".to_string(),
                    now,
                    now,
                ),
            ])
        });

        let use_case = GetAllFoodItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let items = use_case.execute().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Lasagna Rolls");
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllFoodItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), FoodItemError::Repository(_)));
    }
}
