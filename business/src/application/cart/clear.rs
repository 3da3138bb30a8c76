use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Clearing cart of session {}", params.session_id));

        self.store.clear(&params.session_id).await?;

        Ok(())
    }
}
