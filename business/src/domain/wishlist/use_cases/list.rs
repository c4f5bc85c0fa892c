use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::page::{ListingPage, PageRequest};

pub struct ListWishlistParams {
    pub user_id: UserId,
    pub request: PageRequest,
}

#[async_trait]
pub trait ListWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ListWishlistParams) -> Result<ListingPage, WishlistError>;
}
