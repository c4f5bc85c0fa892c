use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ProductId, UserId};

use super::model::{NewWishlistEntry, WishlistEntry};
use super::page::{ListingPage, PageRequest};

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<ListingPage, RepositoryError>;
    async fn find_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError>;
    async fn exists_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError>;
    /// Assigns the identifier. Fails with `RepositoryError::Duplicated` when the
    /// (user, product) pair is already stored.
    async fn save(&self, entry: &NewWishlistEntry) -> Result<WishlistEntry, RepositoryError>;
    async fn delete(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
}
