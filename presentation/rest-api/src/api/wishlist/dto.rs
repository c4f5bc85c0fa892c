use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::wishlist::model::WishlistEntry;
use business::domain::wishlist::page::ListingPage;

#[derive(Debug, Clone, Object)]
pub struct WishlistEntryResponse {
    /// Wishlist entry identifier
    pub id: i64,
    /// Owner of the entry
    pub user_id: i64,
    /// Wished product
    pub product_id: i64,
    /// When the product was added
    pub created_at: DateTime<Utc>,
}

impl From<WishlistEntry> for WishlistEntryResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            id: entry.id.value(),
            user_id: entry.user_id.value(),
            product_id: entry.product_id.value(),
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistPageResponse {
    /// Entries on this page, oldest first
    pub items: Vec<WishlistEntryResponse>,
    /// Zero-based page index
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Number of entries in the whole wishlist
    pub total: u64,
    /// Number of pages at this size
    pub total_pages: u64,
    /// Whether a later page holds more entries
    pub has_next: bool,
}

impl From<ListingPage> for WishlistPageResponse {
    fn from(page: ListingPage) -> Self {
        let total_pages = page.total_pages();
        let has_next = page.has_next();
        Self {
            page: page.request.page(),
            size: page.request.size(),
            total: page.total,
            total_pages,
            has_next,
            items: page.items.into_iter().map(|e| e.into()).collect(),
        }
    }
}
