use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

impl ProductEntity {
    /// Fails when the stored price has no finite `f64` representation.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let Some(price) = self.price.to_f64().filter(|p| p.is_finite()) else {
            tracing::error!(product_id = self.id, price = %self.price, "product price out of range");
            return Err(RepositoryError::DatabaseError);
        };

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            price,
            self.stock,
        ))
    }
}
