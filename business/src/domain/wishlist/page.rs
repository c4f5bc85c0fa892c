use crate::domain::shared::value_objects::UserId;

use super::errors::WishlistError;
use super::model::WishlistEntry;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page index and a page size in `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, WishlistError> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(WishlistError::InvalidPageRequest);
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> u32 {
        self.size
    }
}

/// One page of a user's wishlist plus the pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub items: Vec<WishlistEntry>,
    pub request: PageRequest,
    pub total: u64,
}

impl ListingPage {
    pub fn new(items: Vec<WishlistEntry>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.request.size()))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.request.page()) + 1 < self.total_pages()
    }
}

/// Cache key of a listing: the user plus the page it was requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub user_id: UserId,
    pub request: PageRequest,
}

impl ListingKey {
    pub fn new(user_id: UserId, request: PageRequest) -> Self {
        Self { user_id, request }
    }
}
