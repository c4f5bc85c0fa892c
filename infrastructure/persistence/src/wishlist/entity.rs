use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::{EntryId, ProductId, UserId};
use business::domain::wishlist::model::WishlistEntry;

#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntity {
    pub fn into_domain(self) -> WishlistEntry {
        WishlistEntry::from_repository(
            EntryId::new(self.id),
            UserId::new(self.user_id),
            ProductId::new(self.product_id),
            self.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_row_into_entry() {
        let created_at = Utc::now();
        let entity = WishlistEntity {
            id: 3,
            user_id: 1,
            product_id: 9,
            created_at,
        };

        let entry = entity.into_domain();

        assert_eq!(entry.id, EntryId::new(3));
        assert!(entry.belongs_to(UserId::new(1), ProductId::new(9)));
        assert_eq!(entry.created_at, created_at);
    }
}
