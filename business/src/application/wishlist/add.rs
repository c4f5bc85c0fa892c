use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{NewWishlistEntry, WishlistEntry};
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

use super::service::WishlistService;

impl WishlistService {
    /// Validates user, product, stock and uniqueness in that order, then saves
    /// the entry and evicts the user's cached listings.
    pub async fn add_entry(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<WishlistEntry, WishlistError> {
        self.logger.info(&format!(
            "Attempting to add product {} to wishlist of user {}",
            product_id, user_id
        ));

        let Some(user) = self.users.find_by_id(user_id).await? else {
            self.logger
                .error(&format!("User not found with ID: {}", user_id));
            return Err(WishlistError::UserNotFound(user_id));
        };

        let Some(product) = self.products.find_by_id(product_id).await? else {
            self.logger
                .error(&format!("Product not found with ID: {}", product_id));
            return Err(WishlistError::ProductNotFound(product_id));
        };

        if !product.is_in_stock() {
            self.logger
                .warn(&format!("Product {} is out of stock", product_id));
            return Err(WishlistError::ProductOutOfStock(product_id));
        }

        if self
            .wishlist
            .exists_by_user_and_product(user_id, product_id)
            .await?
        {
            self.logger.warn(&format!(
                "Product {} already exists in wishlist of user {}",
                product_id, user_id
            ));
            return Err(WishlistError::DuplicateEntry {
                user_id,
                product_id,
            });
        }

        // The pre-check above can race with a concurrent add; the store's
        // unique constraint has the final word.
        let saved = self
            .wishlist
            .save(&NewWishlistEntry::new(&user, &product))
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => {
                    self.logger.warn(&format!(
                        "Concurrent add of product {} for user {} rejected by store",
                        product_id, user_id
                    ));
                    WishlistError::DuplicateEntry {
                        user_id,
                        product_id,
                    }
                }
                other => WishlistError::Repository(other),
            })?;

        self.evict_listings(user_id).await;
        self.logger.info(&format!(
            "Added product {} to wishlist of user {} as entry {}",
            product_id, user_id, saved.id
        ));
        Ok(saved)
    }
}

#[async_trait]
impl AddToWishlistUseCase for WishlistService {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistEntry, WishlistError> {
        self.add_entry(params.user_id, params.product_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;
    use proptest::prelude::*;

    use super::*;
    use crate::application::wishlist::test_support::{
        Fixture, InMemoryListingCache, MockProductRepo, MockUserRepo, MockWishlistRepo, entry,
        mock_logger, product, user,
    };
    use crate::domain::shared::value_objects::EntryId;
    use crate::domain::wishlist::cache::ListingCache;
    use crate::domain::wishlist::page::{ListingKey, ListingPage, PageRequest};
    use crate::domain::wishlist::repository::WishlistRepository;

    struct Mocks {
        users: MockUserRepo,
        products: MockProductRepo,
        wishlist: MockWishlistRepo,
        cache: Arc<InMemoryListingCache>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                users: MockUserRepo::new(),
                products: MockProductRepo::new(),
                wishlist: MockWishlistRepo::new(),
                cache: Arc::new(InMemoryListingCache::default()),
            }
        }

        fn with_user_and_product(mut self, stock: i32) -> Self {
            self.users
                .expect_find_by_id()
                .with(eq(UserId::new(1)))
                .returning(|_| Ok(Some(user(1))));
            self.products
                .expect_find_by_id()
                .with(eq(ProductId::new(1)))
                .returning(move |_| Ok(Some(product(1, stock))));
            self
        }

        fn service(self) -> WishlistService {
            WishlistService {
                users: Arc::new(self.users),
                products: Arc::new(self.products),
                wishlist: Arc::new(self.wishlist),
                cache: self.cache,
                logger: mock_logger(),
            }
        }
    }

    async fn seed_cached_page(cache: &InMemoryListingCache) {
        let request = PageRequest::new(0, 5).unwrap();
        let generation = cache.generation(UserId::new(1)).await;
        cache
            .put(
                ListingKey::new(UserId::new(1), request),
                ListingPage::new(vec![entry(9, 1, 9)], request, 1),
                generation,
            )
            .await;
    }

    #[tokio::test]
    async fn should_save_entry_and_evict_cached_listings() {
        let mut mocks = Mocks::new().with_user_and_product(10);
        mocks
            .wishlist
            .expect_exists_by_user_and_product()
            .returning(|_, _| Ok(false));
        mocks
            .wishlist
            .expect_save()
            .times(1)
            .returning(|new_entry| Ok(new_entry.clone().into_saved(EntryId::new(1))));
        let cache = mocks.cache.clone();
        seed_cached_page(&cache).await;
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        let saved = result.unwrap();
        assert!(saved.belongs_to(UserId::new(1), ProductId::new(1)));
        assert_eq!(cache.cached_pages(UserId::new(1)), 0);
    }

    #[tokio::test]
    async fn should_fail_with_user_not_found_before_looking_up_product() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_id().returning(|_| Ok(None));
        mocks.products.expect_find_by_id().never();
        mocks.wishlist.expect_save().never();
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::UserNotFound(id) if id == UserId::new(1)
        ));
    }

    #[tokio::test]
    async fn should_fail_with_product_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_id()
            .returning(|_| Ok(Some(user(1))));
        mocks.products.expect_find_by_id().returning(|_| Ok(None));
        mocks.wishlist.expect_save().never();
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::ProductNotFound(_)
        ));
    }

    #[tokio::test]
    async fn should_fail_with_out_of_stock_before_duplicate_check() {
        let mut mocks = Mocks::new().with_user_and_product(0);
        mocks.wishlist.expect_exists_by_user_and_product().never();
        mocks.wishlist.expect_save().never();
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::ProductOutOfStock(_)
        ));
    }

    #[tokio::test]
    async fn should_fail_with_duplicate_when_entry_exists() {
        let mut mocks = Mocks::new().with_user_and_product(10);
        mocks
            .wishlist
            .expect_exists_by_user_and_product()
            .returning(|_, _| Ok(true));
        mocks.wishlist.expect_save().never();
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::DuplicateEntry { .. }
        ));
    }

    #[tokio::test]
    async fn should_translate_store_uniqueness_violation_into_duplicate() {
        let mut mocks = Mocks::new().with_user_and_product(10);
        mocks
            .wishlist
            .expect_exists_by_user_and_product()
            .returning(|_, _| Ok(false));
        mocks
            .wishlist
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::DuplicateEntry { .. }
        ));
    }

    #[tokio::test]
    async fn should_keep_cache_when_save_fails() {
        let mut mocks = Mocks::new().with_user_and_product(10);
        mocks
            .wishlist
            .expect_exists_by_user_and_product()
            .returning(|_, _| Ok(false));
        mocks
            .wishlist
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let cache = mocks.cache.clone();
        seed_cached_page(&cache).await;
        let service = mocks.service();

        let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Repository(RepositoryError::DatabaseError)
        ));
        assert_eq!(cache.cached_pages(UserId::new(1)), 1);
    }

    #[tokio::test]
    async fn should_add_through_use_case_port() {
        let fixture = Fixture::new()
            .with_user(user(4))
            .with_product(product(8, 1));
        let service = fixture.service();
        let use_case: &dyn AddToWishlistUseCase = &service;

        let saved = use_case
            .execute(AddToWishlistParams {
                user_id: UserId::new(4),
                product_id: ProductId::new(8),
            })
            .await
            .unwrap();

        assert_eq!(saved.user_id, UserId::new(4));
        assert_eq!(fixture.wishlist.len(), 1);
    }

    fn expected_failure(
        user_exists: bool,
        product_exists: bool,
        stock: i32,
        duplicate: bool,
    ) -> Option<&'static str> {
        if !user_exists {
            Some("user")
        } else if !product_exists {
            Some("product")
        } else if stock <= 0 {
            Some("stock")
        } else if duplicate {
            Some("duplicate")
        } else {
            None
        }
    }

    fn failure_kind(err: &WishlistError) -> &'static str {
        match err {
            WishlistError::UserNotFound(_) => "user",
            WishlistError::ProductNotFound(_) => "product",
            WishlistError::ProductOutOfStock(_) => "stock",
            WishlistError::DuplicateEntry { .. } => "duplicate",
            _ => "other",
        }
    }

    proptest! {
        #[test]
        fn validation_order_is_deterministic(
            user_exists in any::<bool>(),
            product_exists in any::<bool>(),
            stock in -2i32..5,
            duplicate in any::<bool>(),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            let outcome = runtime.block_on(async {
                let mut fixture = Fixture::new();
                if user_exists {
                    fixture = fixture.with_user(user(1));
                }
                if product_exists {
                    fixture = fixture.with_product(product(1, stock));
                }
                let service = fixture.service();
                if duplicate {
                    let seed = NewWishlistEntry::new(&user(1), &product(1, 1));
                    fixture.wishlist.save(&seed).await.unwrap();
                }
                let before = fixture.wishlist.len();
                let result = service.add_entry(UserId::new(1), ProductId::new(1)).await;
                (result, before, fixture.wishlist.len())
            });

            let (result, before, after) = outcome;
            match expected_failure(user_exists, product_exists, stock, duplicate) {
                Some(kind) => {
                    let err = result.unwrap_err();
                    prop_assert_eq!(failure_kind(&err), kind);
                    prop_assert_eq!(before, after);
                }
                None => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(after, before + 1);
                }
            }
        }
    }
}
