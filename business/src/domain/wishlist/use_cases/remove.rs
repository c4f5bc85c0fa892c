use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wishlist::errors::WishlistError;

pub struct RemoveFromWishlistParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError>;
}
