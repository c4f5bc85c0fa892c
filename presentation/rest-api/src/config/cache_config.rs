use std::time::Duration;

use cache::ListingCacheConfig;

use super::env::parse_var_or;

/// Load the wishlist listing cache settings
///
/// Environment variables:
/// - WISHLIST_CACHE_MAX_USERS: Users whose pages are kept (default: 10000)
/// - WISHLIST_CACHE_MAX_PAGES_PER_USER: Distinct pages kept per user (default: 32)
/// - WISHLIST_CACHE_IDLE_SECONDS: Idle expiry per user, 0 disables it (default: 0)
pub fn from_env() -> ListingCacheConfig {
    let defaults = ListingCacheConfig::default();
    let idle_secs: u64 = parse_var_or("WISHLIST_CACHE_IDLE_SECONDS", 0);

    ListingCacheConfig {
        max_users: parse_var_or("WISHLIST_CACHE_MAX_USERS", defaults.max_users),
        max_pages_per_user: parse_var_or(
            "WISHLIST_CACHE_MAX_PAGES_PER_USER",
            defaults.max_pages_per_user,
        ),
        idle_timeout: (idle_secs > 0).then(|| Duration::from_secs(idle_secs)),
    }
}
