use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::logger::Logger;
use crate::domain::storefront::errors::StorefrontError;
use crate::domain::storefront::use_cases::render::{
    RenderStorefrontParams, RenderStorefrontUseCase,
};
use crate::domain::storefront::view::{AssetBaseUrl, ItemView};

pub struct RenderStorefrontUseCaseImpl {
    pub food_item_repository: Arc<dyn FoodItemRepository>,
    pub store: Arc<dyn CartStore>,
    pub base_url: AssetBaseUrl,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenderStorefrontUseCase for RenderStorefrontUseCaseImpl {
    async fn execute(
        &self,
        params: RenderStorefrontParams,
    ) -> Result<Vec<ItemView>, StorefrontError> {
        self.logger.info(&format!(
            "Rendering storefront for session {}",
            params.session_id
        ));

        let catalog = self.food_item_repository.get_all().await?;
        let cart = self.store.get(&params.session_id).await?;

        catalog
            .iter()
            .map(|item| ItemView::render(item, cart.entry(&item.id), &self.base_url))
            .collect()
    }
}
