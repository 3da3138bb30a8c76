use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use business::domain::cart::model::{Cart, CartEntry};
use business::domain::cart::store::CartStore;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{ItemId, SessionId};

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_MAX_ITEMS_PER_CART: usize = 200;

/// Process-local carts keyed by session. Nothing survives a restart.
///
/// Both the number of live sessions and the distinct items per cart are
/// capped. Adding more units of an item already in the cart is always allowed.
pub struct InMemoryCartStore {
    carts: Mutex<HashMap<SessionId, Cart>>,
    max_sessions: usize,
    max_items_per_cart: usize,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_MAX_ITEMS_PER_CART)
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, max_items_per_cart: usize) -> Self {
        Self {
            carts: Mutex::new(HashMap::new()),
            max_sessions,
            max_items_per_cart,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Cart>>, RepositoryError> {
        self.carts.lock().map_err(|e| {
            tracing::error!("Cart store lock poisoned: {e}");
            RepositoryError::StoreUnavailable
        })
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError> {
        let carts = self.lock()?;
        Ok(carts.get(session_id).cloned().unwrap_or_default())
    }

    async fn add(
        &self,
        session_id: &SessionId,
        item_id: &ItemId,
    ) -> Result<NonZeroU32, RepositoryError> {
        let mut carts = self.lock()?;
        match carts.get(session_id) {
            None if carts.len() >= self.max_sessions => {
                tracing::warn!("Cart store full ({} sessions), rejecting new session", carts.len());
                return Err(RepositoryError::CapacityExceeded);
            }
            Some(cart) if cart.quantity(item_id) == 0 && cart.len() >= self.max_items_per_cart => {
                tracing::warn!("Cart for session {session_id} is full");
                return Err(RepositoryError::CapacityExceeded);
            }
            _ => {}
        }

        Ok(carts.entry(session_id.clone()).or_default().add(item_id))
    }

    async fn remove(
        &self,
        session_id: &SessionId,
        item_id: &ItemId,
    ) -> Result<CartEntry, RepositoryError> {
        let mut carts = self.lock()?;
        let Some(cart) = carts.get_mut(session_id) else {
            return Ok(CartEntry::Absent);
        };

        let entry = cart.remove(item_id);
        if cart.is_empty() {
            carts.remove(session_id);
        }
        Ok(entry)
    }

    async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        let mut carts = self.lock()?;
        carts.remove(session_id);
        Ok(())
    }
}
