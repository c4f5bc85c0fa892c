use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;

use super::page::{ListingKey, ListingPage};

/// Read-through cache of listing pages, partitioned by user.
///
/// Every mutation of a user's wishlist calls `evict_user`, which drops all of
/// that user's pages and advances the user's generation. A page computed from a
/// read that started under an older generation is refused by `put`, so a slow
/// reader cannot bring back pre-mutation data.
#[async_trait]
pub trait ListingCache: Send + Sync {
    async fn get(&self, key: &ListingKey) -> Option<ListingPage>;
    /// Generation to capture before reading the store for `user_id`.
    async fn generation(&self, user_id: UserId) -> u64;
    /// Stores `page` unless the user was evicted since `generation` was read.
    async fn put(&self, key: ListingKey, page: ListingPage, generation: u64);
    async fn evict_user(&self, user_id: UserId);
}
