use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use super::service::WishlistService;

impl WishlistService {
    pub async fn remove_entry(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), WishlistError> {
        self.logger.info(&format!(
            "Attempting to remove product {} from wishlist of user {}",
            product_id, user_id
        ));

        let Some(entry) = self
            .wishlist
            .find_by_user_and_product(user_id, product_id)
            .await?
        else {
            self.logger.warn(&format!(
                "Wishlist item not found for product {} and user {}",
                product_id, user_id
            ));
            return Err(WishlistError::EntryNotFound {
                user_id,
                product_id,
            });
        };

        self.wishlist.delete(&entry).await?;
        self.evict_listings(user_id).await;

        self.logger.info(&format!(
            "Removed product {} from wishlist of user {}",
            product_id, user_id
        ));
        Ok(())
    }
}

#[async_trait]
impl RemoveFromWishlistUseCase for WishlistService {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError> {
        self.remove_entry(params.user_id, params.product_id).await
    }
}
