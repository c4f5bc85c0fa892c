use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;

pub struct AddToWishlistParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistEntry, WishlistError>;
}
