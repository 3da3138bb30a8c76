use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartEntry;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartEntry, CartError> {
        self.logger.debug(&format!(
            "Removing item {} from cart of session {}",
            params.item_id, params.session_id
        ));

        let entry = self
            .store
            .remove(&params.session_id, &params.item_id)
            .await?;

        match entry {
            CartEntry::Present(quantity) => self.logger.info(&format!(
                "Item {} quantity is now {} in session {}",
                params.item_id, quantity, params.session_id
            )),
            CartEntry::Absent => self.logger.info(&format!(
                "Item {} is no longer in the cart of session {}",
                params.item_id, params.session_id
            )),
        }
        Ok(entry)
    }
}
