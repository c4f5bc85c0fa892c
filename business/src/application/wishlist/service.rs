use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::repository::UserRepository;
use crate::domain::wishlist::cache::ListingCache;
use crate::domain::wishlist::repository::WishlistRepository;

/// Coordinates the user and product master data, the wishlist store and the
/// listing cache.
///
/// The three operations live in sibling modules (`list`, `add`, `remove`),
/// each also exposed through its use-case port.
pub struct WishlistService {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub wishlist: Arc<dyn WishlistRepository>,
    pub cache: Arc<dyn ListingCache>,
    pub logger: Arc<dyn Logger>,
}

impl WishlistService {
    /// Must run after the store mutation committed and before the mutating
    /// call returns.
    pub(super) async fn evict_listings(&self, user_id: UserId) {
        self.cache.evict_user(user_id).await;
        self.logger
            .debug(&format!("Evicted cached wishlist pages for user {}", user_id));
    }
}
