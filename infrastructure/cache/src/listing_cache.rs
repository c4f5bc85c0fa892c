use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::cache::ListingCache;
use business::domain::wishlist::page::{ListingKey, ListingPage, PageRequest};

/// Sizing of the listing cache.
#[derive(Debug, Clone)]
pub struct ListingCacheConfig {
    /// Maximum number of users whose pages are kept.
    pub max_users: u64,
    /// Maximum number of distinct pages kept per user. Together with the page
    /// size limit this bounds the memory of one partition.
    pub max_pages_per_user: usize,
    /// Drop a user's pages after this long without access. `None` keeps them
    /// until the next mutation.
    pub idle_timeout: Option<Duration>,
}

impl Default for ListingCacheConfig {
    fn default() -> Self {
        Self {
            max_users: 10_000,
            max_pages_per_user: 32,
            idle_timeout: None,
        }
    }
}

/// All cached pages of one user. A partition is replaced, never reset, so its
/// generation identifies the state of the user's wishlist it was filled from.
struct UserListings {
    generation: u64,
    pages: Mutex<HashMap<PageRequest, ListingPage>>,
}

impl UserListings {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            pages: Mutex::new(HashMap::new()),
        }
    }
}

/// `ListingCache` on top of moka, one cache entry per user.
///
/// Evicting a user invalidates the whole partition. Readers still holding the
/// old partition can only write into the detached copy, and the generation
/// check in `put` rejects their pages once a newer partition is installed.
pub struct MokaListingCache {
    partitions: Cache<UserId, Arc<UserListings>>,
    next_generation: AtomicU64,
    max_pages_per_user: usize,
}

impl MokaListingCache {
    pub fn new(config: &ListingCacheConfig) -> Self {
        let mut builder =
            Cache::<UserId, Arc<UserListings>>::builder().max_capacity(config.max_users);
        if let Some(idle) = config.idle_timeout {
            builder = builder.time_to_idle(idle);
        }

        Self {
            partitions: builder.build(),
            next_generation: AtomicU64::new(1),
            max_pages_per_user: config.max_pages_per_user,
        }
    }

    async fn partition(&self, user_id: UserId) -> Arc<UserListings> {
        self.partitions
            .get_with(user_id, async {
                let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
                Arc::new(UserListings::new(generation))
            })
            .await
    }
}

impl Default for MokaListingCache {
    fn default() -> Self {
        Self::new(&ListingCacheConfig::default())
    }
}

#[async_trait]
impl ListingCache for MokaListingCache {
    async fn get(&self, key: &ListingKey) -> Option<ListingPage> {
        let partition = self.partitions.get(&key.user_id).await?;
        let pages = partition
            .pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pages.get(&key.request).cloned()
    }

    async fn generation(&self, user_id: UserId) -> u64 {
        self.partition(user_id).await.generation
    }

    async fn put(&self, key: ListingKey, page: ListingPage, generation: u64) {
        let Some(partition) = self.partitions.get(&key.user_id).await else {
            debug!(user_id = %key.user_id, "listing partition gone, page not cached");
            return;
        };
        if partition.generation != generation {
            debug!(
                user_id = %key.user_id,
                stale = generation,
                current = partition.generation,
                "stale listing page not cached"
            );
            return;
        }
        let mut pages = partition
            .pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if pages.len() >= self.max_pages_per_user && !pages.contains_key(&key.request) {
            debug!(user_id = %key.user_id, "listing partition full, page not cached");
            return;
        }
        pages.insert(key.request, page);
    }

    async fn evict_user(&self, user_id: UserId) {
        self.partitions.invalidate(&user_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::{EntryId, ProductId};
    use business::domain::wishlist::model::WishlistEntry;
    use business::domain::wishlist::page::MAX_PAGE_SIZE;

    fn page(request: PageRequest, product_ids: &[i64]) -> ListingPage {
        let items: Vec<WishlistEntry> = product_ids
            .iter()
            .enumerate()
            .map(|(i, product_id)| {
                WishlistEntry::from_repository(
                    EntryId::new(i as i64 + 1),
                    UserId::new(1),
                    ProductId::new(*product_id),
                    chrono::Utc::now(),
                )
            })
            .collect();
        let total = items.len() as u64;
        ListingPage::new(items, request, total)
    }

    fn key(user_id: i64, page: u32, size: u32) -> ListingKey {
        ListingKey::new(UserId::new(user_id), PageRequest::new(page, size).unwrap())
    }

    #[tokio::test]
    async fn should_return_page_stored_under_current_generation() {
        let cache = MokaListingCache::default();
        let key = key(1, 0, 5);
        let generation = cache.generation(key.user_id).await;

        cache.put(key, page(key.request, &[10, 11]), generation).await;

        let cached = cache.get(&key).await.unwrap();
        assert_eq!(cached.items.len(), 2);
    }

    #[tokio::test]
    async fn should_miss_for_other_page_sizes() {
        let cache = MokaListingCache::default();
        let stored = key(1, 0, 5);
        let generation = cache.generation(stored.user_id).await;
        cache.put(stored, page(stored.request, &[10]), generation).await;

        assert!(cache.get(&key(1, 0, 10)).await.is_none());
        assert!(cache.get(&key(1, 1, 5)).await.is_none());
    }

    #[tokio::test]
    async fn should_evict_every_page_of_the_user() {
        let cache = MokaListingCache::default();
        let generation = cache.generation(UserId::new(1)).await;
        for k in [key(1, 0, 5), key(1, 1, 5), key(1, 0, 20)] {
            cache.put(k, page(k.request, &[10]), generation).await;
        }

        cache.evict_user(UserId::new(1)).await;

        for k in [key(1, 0, 5), key(1, 1, 5), key(1, 0, 20)] {
            assert!(cache.get(&k).await.is_none());
        }
    }

    #[tokio::test]
    async fn should_leave_other_users_cached_on_eviction() {
        let cache = MokaListingCache::default();
        let other = key(2, 0, 5);
        let generation = cache.generation(other.user_id).await;
        cache.put(other, page(other.request, &[10]), generation).await;

        cache.evict_user(UserId::new(1)).await;

        assert!(cache.get(&other).await.is_some());
    }

    #[tokio::test]
    async fn should_advance_generation_on_eviction() {
        let cache = MokaListingCache::default();
        let before = cache.generation(UserId::new(1)).await;

        cache.evict_user(UserId::new(1)).await;

        assert_ne!(cache.generation(UserId::new(1)).await, before);
    }

    #[tokio::test]
    async fn should_reject_page_read_before_eviction() {
        let cache = MokaListingCache::default();
        let key = key(1, 0, 5);
        let stale_generation = cache.generation(key.user_id).await;

        cache.evict_user(key.user_id).await;
        // A fresh reader recreates the partition before the stale one writes.
        let fresh_generation = cache.generation(key.user_id).await;
        cache
            .put(key, page(key.request, &[10]), stale_generation)
            .await;
        assert!(cache.get(&key).await.is_none());

        cache
            .put(key, page(key.request, &[10, 11]), fresh_generation)
            .await;
        assert_eq!(cache.get(&key).await.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn should_drop_page_when_partition_was_evicted_and_not_recreated() {
        let cache = MokaListingCache::default();
        let key = key(1, 0, 5);
        let generation = cache.generation(key.user_id).await;

        cache.evict_user(key.user_id).await;
        cache.put(key, page(key.request, &[10]), generation).await;

        assert!(cache.get(&key).await.is_none());
    }

    async fn pages_held(cache: &MokaListingCache, user_id: UserId) -> usize {
        match cache.partitions.get(&user_id).await {
            Some(partition) => partition
                .pages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
            None => 0,
        }
    }

    #[tokio::test]
    async fn should_bound_pages_held_per_user() {
        let cache = MokaListingCache::new(&ListingCacheConfig {
            max_users: 1,
            max_pages_per_user: 8,
            idle_timeout: None,
        });
        let user_id = UserId::new(1);
        let generation = cache.generation(user_id).await;

        for size in 1..=MAX_PAGE_SIZE {
            let k = key(1, 0, size);
            cache.put(k, page(k.request, &[10]), generation).await;
        }
        cache.partitions.run_pending_tasks().await;

        assert_eq!(pages_held(&cache, user_id).await, 8);
        assert!(cache.get(&key(1, 0, 1)).await.is_some());
        assert!(cache.get(&key(1, 0, 9)).await.is_none());
    }

    #[tokio::test]
    async fn should_refresh_known_page_when_partition_is_full() {
        let cache = MokaListingCache::new(&ListingCacheConfig {
            max_pages_per_user: 1,
            ..ListingCacheConfig::default()
        });
        let k = key(1, 0, 5);
        let generation = cache.generation(k.user_id).await;
        cache.put(k, page(k.request, &[10]), generation).await;

        cache.put(k, page(k.request, &[10, 11]), generation).await;

        assert_eq!(cache.get(&k).await.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn should_serve_concurrent_users_independently() {
        let cache = Arc::new(MokaListingCache::default());
        let mut handles = Vec::new();
        for user in 1..=16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let k = key(user, 0, 5);
                let generation = cache.generation(k.user_id).await;
                cache.put(k, page(k.request, &[user]), generation).await;
                cache.get(&k).await.map(|p| p.items[0].product_id)
            }));
        }

        for (user, handle) in (1..=16).zip(handles) {
            assert_eq!(handle.await.unwrap(), Some(ProductId::new(user)));
        }
    }
}
