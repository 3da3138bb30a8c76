use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<u32, CartError> {
        self.logger.debug(&format!(
            "Adding item {} to cart of session {}",
            params.item_id, params.session_id
        ));

        let quantity = self
            .store
            .add(&params.session_id, &params.item_id)
            .await?;

        self.logger.info(&format!(
            "Item {} quantity is now {} in session {}",
            params.item_id, quantity, params.session_id
        ));
        Ok(quantity.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    use crate::domain::cart::model::{Cart, CartEntry};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{ItemId, SessionId};
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
            async fn add(&self, session_id: &SessionId, item_id: &ItemId) -> Result<NonZeroU32, RepositoryError>;
            async fn remove(&self, session_id: &SessionId, item_id: &ItemId) -> Result<CartEntry, RepositoryError>;
            async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
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
    async fn should_return_new_quantity_when_added() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_add()
            .withf(|session, item| session.as_str() == "tab-1" && item.as_str() == "42")
            .times(1)
            .returning(|_, _| Ok(NonZeroU32::new(2).unwrap()));

        let use_case = AddToCartUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                session_id: SessionId::new("tab-1"),
                item_id: ItemId::new("42"),
            })
            .await;

        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_add()
            .returning(|_, _| Err(RepositoryError::StoreUnavailable));

        let use_case = AddToCartUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                session_id: SessionId::new("tab-1"),
                item_id: ItemId::new("42"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::StoreUnavailable)
        ));
    }
}
