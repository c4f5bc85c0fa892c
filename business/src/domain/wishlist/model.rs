use chrono::{DateTime, Utc};

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{EntryId, ProductId, UserId};
use crate::domain::user::model::User;

/// A persisted association between one user and one product.
///
/// Entries are immutable: a change is expressed as delete then recreate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

/// An entry that has not been saved yet. The store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWishlistEntry {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

impl NewWishlistEntry {
    /// Only fetched users and products can be linked, so both references exist
    /// at creation time.
    pub fn new(user: &User, product: &Product) -> Self {
        Self {
            user_id: user.id,
            product_id: product.id,
            created_at: Utc::now(),
        }
    }

    pub fn into_saved(self, id: EntryId) -> WishlistEntry {
        WishlistEntry {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            created_at: self.created_at,
        }
    }
}

impl WishlistEntry {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: EntryId,
        user_id: UserId,
        product_id: ProductId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            created_at,
        }
    }

    pub fn belongs_to(&self, user_id: UserId, product_id: ProductId) -> bool {
        self.user_id == user_id && self.product_id == product_id
    }
}
