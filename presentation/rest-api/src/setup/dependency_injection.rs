use std::sync::Arc;

use business::application::wishlist::service::WishlistService;
use cache::{ListingCacheConfig, MokaListingCache};
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use crate::api::health::routes::Api as HealthApi;
use crate::api::wishlist::routes::WishlistApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, cache_config: &ListingCacheConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let users = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let products = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let wishlist = Arc::new(WishlistRepositoryPostgres::new(pool));
        let cache = Arc::new(MokaListingCache::new(cache_config));

        // One service instance backs all three wishlist ports so they share
        // the same listing cache.
        let service = Arc::new(WishlistService {
            users,
            products,
            wishlist,
            cache,
            logger,
        });

        let wishlist_api = WishlistApi::new(service.clone(), service.clone(), service);

        Self {
            health_api: HealthApi::new(),
            wishlist_api,
        }
    }
}
