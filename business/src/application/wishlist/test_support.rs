//! Test doubles for the wishlist ports: mockall mocks for interaction checks and
//! small stateful in-memory stores for scenario tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::{EntryId, ProductId, UserId};
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::wishlist::cache::ListingCache;
use crate::domain::wishlist::model::{NewWishlistEntry, WishlistEntry};
use crate::domain::wishlist::page::{ListingKey, ListingPage, PageRequest};
use crate::domain::wishlist::repository::WishlistRepository;

use super::service::WishlistService;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    }
}

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn find_by_user(&self, user_id: UserId, request: PageRequest) -> Result<ListingPage, RepositoryError>;
        async fn find_by_user_and_product(&self, user_id: UserId, product_id: ProductId) -> Result<Option<WishlistEntry>, RepositoryError>;
        async fn exists_by_user_and_product(&self, user_id: UserId, product_id: ProductId) -> Result<bool, RepositoryError>;
        async fn save(&self, entry: &NewWishlistEntry) -> Result<WishlistEntry, RepositoryError>;
        async fn delete(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn user(id: i64) -> User {
    User::from_repository(
        UserId::new(id),
        "Megha".to_string(),
        "Biradar".to_string(),
        format!("user{}@example.com", id),
    )
}

pub fn product(id: i64, stock: i32) -> Product {
    Product::from_repository(
        ProductId::new(id),
        "Smartphone".to_string(),
        Some("Latest model".to_string()),
        599.99,
        stock,
    )
}

pub fn entry(id: i64, user_id: i64, product_id: i64) -> WishlistEntry {
    WishlistEntry::from_repository(
        EntryId::new(id),
        UserId::new(user_id),
        ProductId::new(product_id),
        chrono::Utc::now(),
    )
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    products: Mutex<HashMap<ProductId, Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Default)]
struct WishlistState {
    entries: Vec<WishlistEntry>,
    next_id: i64,
    listing_reads: usize,
}

/// Enforces the (user, product) uniqueness the way a unique index would.
#[derive(Default)]
pub struct InMemoryWishlist {
    state: Mutex<WishlistState>,
}

impl InMemoryWishlist {
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    pub fn listing_reads(&self) -> usize {
        self.state.lock().unwrap().listing_reads
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlist {
    async fn find_by_user(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<ListingPage, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.listing_reads += 1;
        let mut owned: Vec<WishlistEntry> = state
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|e| (e.created_at, e.id));
        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Ok(ListingPage::new(items, request, total))
    }

    async fn find_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<WishlistEntry>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .iter()
            .find(|e| e.belongs_to(user_id, product_id))
            .cloned())
    }

    async fn exists_by_user_and_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .iter()
            .any(|e| e.belongs_to(user_id, product_id)))
    }

    async fn save(&self, entry: &NewWishlistEntry) -> Result<WishlistEntry, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .entries
            .iter()
            .any(|e| e.belongs_to(entry.user_id, entry.product_id))
        {
            return Err(RepositoryError::Duplicated);
        }
        state.next_id += 1;
        let saved = entry.clone().into_saved(EntryId::new(state.next_id));
        state.entries.push(saved.clone());
        Ok(saved)
    }

    async fn delete(&self, entry: &WishlistEntry) -> Result<(), RepositoryError> {
        self.state.lock().unwrap().entries.retain(|e| e.id != entry.id);
        Ok(())
    }
}

#[derive(Default)]
struct CacheState {
    generations: HashMap<UserId, u64>,
    pages: HashMap<ListingKey, ListingPage>,
}

#[derive(Default)]
pub struct InMemoryListingCache {
    state: Mutex<CacheState>,
}

impl InMemoryListingCache {
    /// Synchronous eviction, usable from inside mock closures.
    pub fn evict_now(&self, user_id: UserId) {
        let mut state = self.state.lock().unwrap();
        *state.generations.entry(user_id).or_insert(0) += 1;
        state.pages.retain(|key, _| key.user_id != user_id);
    }

    pub fn cached_pages(&self, user_id: UserId) -> usize {
        let state = self.state.lock().unwrap();
        state.pages.keys().filter(|k| k.user_id == user_id).count()
    }
}

#[async_trait]
impl ListingCache for InMemoryListingCache {
    async fn get(&self, key: &ListingKey) -> Option<ListingPage> {
        self.state.lock().unwrap().pages.get(key).cloned()
    }

    async fn generation(&self, user_id: UserId) -> u64 {
        let state = self.state.lock().unwrap();
        state.generations.get(&user_id).copied().unwrap_or(0)
    }

    async fn put(&self, key: ListingKey, page: ListingPage, generation: u64) {
        let mut state = self.state.lock().unwrap();
        let current = state.generations.get(&key.user_id).copied().unwrap_or(0);
        if current == generation {
            state.pages.insert(key, page);
        }
    }

    async fn evict_user(&self, user_id: UserId) {
        self.evict_now(user_id);
    }
}

#[derive(Default)]
pub struct Fixture {
    pub users: Arc<InMemoryUsers>,
    pub products: Arc<InMemoryProducts>,
    pub wishlist: Arc<InMemoryWishlist>,
    pub cache: Arc<InMemoryListingCache>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.users.lock().unwrap().insert(user.id, user);
        self
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products
            .products
            .lock()
            .unwrap()
            .insert(product.id, product);
        self
    }

    pub fn service(&self) -> WishlistService {
        WishlistService {
            users: self.users.clone(),
            products: self.products.clone(),
            wishlist: self.wishlist.clone(),
            cache: self.cache.clone(),
            logger: mock_logger(),
        }
    }
}
