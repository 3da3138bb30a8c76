use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub food_item_repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError> {
        self.logger
            .info(&format!("Fetching cart of session {}", params.session_id));

        let cart = self.store.get(&params.session_id).await?;
        if cart.is_empty() {
            return Ok(CartSummary::build(&cart, &[]));
        }

        let catalog = self.food_item_repository.get_all().await?;
        let summary = CartSummary::build(&cart, &catalog);

        if summary.lines.iter().any(|line| line.unit_price.is_none()) {
            self.logger.warn(&format!(
                "Cart of session {} references items missing from the catalog",
                params.session_id
            ));
        }
        Ok(summary)
    }
}
