use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("User not found with ID: {0}")]
    UserNotFound(UserId),
    #[error("Product not found with ID: {0}")]
    ProductNotFound(ProductId),
    #[error("Product ID {0} is out of stock")]
    ProductOutOfStock(ProductId),
    #[error("Product {product_id} already exists in wishlist of user {user_id}")]
    DuplicateEntry {
        user_id: UserId,
        product_id: ProductId,
    },
    #[error("Wishlist item not found for product ID {product_id} and user {user_id}")]
    EntryNotFound {
        user_id: UserId,
        product_id: ProductId,
    },
    #[error("Wishlist not found for user: {0}")]
    WishlistNotFound(UserId),
    #[error("Page size must be greater than zero")]
    InvalidPageRequest,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl WishlistError {
    /// Code-style identifier for i18n on the presentation side.
    pub fn code(&self) -> &'static str {
        match self {
            WishlistError::UserNotFound(_) => "wishlist.user_not_found",
            WishlistError::ProductNotFound(_) => "wishlist.product_not_found",
            WishlistError::ProductOutOfStock(_) => "wishlist.product_out_of_stock",
            WishlistError::DuplicateEntry { .. } => "wishlist.duplicate_entry",
            WishlistError::EntryNotFound { .. } => "wishlist.entry_not_found",
            WishlistError::WishlistNotFound(_) => "wishlist.not_found",
            WishlistError::InvalidPageRequest => "wishlist.invalid_page_request",
            WishlistError::Repository(_) => "repository.persistence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_human_readable_message() {
        let err = WishlistError::ProductOutOfStock(ProductId::new(3));
        assert_eq!(err.to_string(), "Product ID 3 is out of stock");
    }

    #[test]
    fn should_wrap_repository_errors() {
        let err: WishlistError = RepositoryError::DatabaseError.into();

        assert!(matches!(
            err,
            WishlistError::Repository(RepositoryError::DatabaseError)
        ));
        assert_eq!(err.code(), "repository.persistence");
    }

    #[test]
    fn should_expose_codes_per_kind() {
        let err = WishlistError::DuplicateEntry {
            user_id: UserId::new(1),
            product_id: ProductId::new(2),
        };
        assert_eq!(err.code(), "wishlist.duplicate_entry");
        assert_eq!(
            WishlistError::WishlistNotFound(UserId::new(1)).code(),
            "wishlist.not_found"
        );
    }
}
