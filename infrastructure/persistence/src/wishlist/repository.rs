use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{EntryId, ProductId, UserId};
use business::domain::wishlist::model::{NewWishlistEntry, WishlistEntry};
use business::domain::wishlist::page::{ListingPage, PageRequest};
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntity;
use crate::errors::map_sqlx_error;

/// Wishlist entries in the `wishlist` table. The `(user_id, product_id)`
/// unique index is what rejects concurrent duplicates.
pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<ListingPage, RepositoryError> {
        let offset = i64::try_from(request.offset()).map_err(|_| RepositoryError::Persistence)?;

        // Both reads share one snapshot so `total` agrees with the page.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let entities = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist WHERE user_id = $1 ORDER BY created_at, id LIMIT $2 OFFSET $3",
        )
        .bind(user_id.value())
        .bind(i64::from(request.limit()))
        .bind(offset)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wishlist WHERE user_id = $1")
            .bind(user_id.value())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(ListingPage::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.value())
        .bind(product_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn exists_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM wishlist WHERE user_id = $1 AND product_id = $2)",
        )
        .bind(user_id.value())
        .bind(product_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, entry: &NewWishlistEntry) -> Result<WishlistEntry, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO wishlist (user_id, product_id, created_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(entry.user_id.value())
        .bind(entry.product_id.value())
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entry.clone().into_saved(EntryId::new(id)))
    }

    async fn delete(&self, entry: &WishlistEntry) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM wishlist WHERE id = $1")
            .bind(entry.id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
