pub mod db;
mod errors;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
