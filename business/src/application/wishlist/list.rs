use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::page::{ListingKey, ListingPage, PageRequest};
use crate::domain::wishlist::use_cases::list::{ListWishlistParams, ListWishlistUseCase};

use super::service::WishlistService;

impl WishlistService {
    /// Read-through listing of one page of a user's wishlist.
    ///
    /// An empty page is reported as `WishlistNotFound` and is never cached.
    /// The user itself is not looked up.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<ListingPage, WishlistError> {
        self.logger.info(&format!(
            "Fetching wishlist items for user {} (page {}, size {})",
            user_id,
            request.page(),
            request.size()
        ));

        let key = ListingKey::new(user_id, request);
        if let Some(page) = self.cache.get(&key).await {
            self.logger
                .debug(&format!("Wishlist cache hit for user {}", user_id));
            return Ok(page);
        }

        // Captured before the read so a concurrent eviction invalidates this result.
        let generation = self.cache.generation(user_id).await;
        let page = self.wishlist.find_by_user(user_id, request).await?;

        if page.is_empty() {
            self.logger
                .warn(&format!("Wishlist is empty for user {}", user_id));
            return Err(WishlistError::WishlistNotFound(user_id));
        }

        self.cache.put(key, page.clone(), generation).await;
        self.logger.info(&format!(
            "Fetched {} of {} wishlist items for user {}",
            page.items.len(),
            page.total,
            user_id
        ));
        Ok(page)
    }
}

#[async_trait]
impl ListWishlistUseCase for WishlistService {
    async fn execute(&self, params: ListWishlistParams) -> Result<ListingPage, WishlistError> {
        self.list_for_user(params.user_id, params.request).await
    }
}
