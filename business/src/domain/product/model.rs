use crate::domain::shared::value_objects::ProductId;

/// A catalog product. Stock is owned by the catalog and only read here.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
