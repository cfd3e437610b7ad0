use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

/// On-disk shape of a product inside the backing JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.title,
            self.description,
            self.price,
            self.thumbnail,
            self.code,
            self.stock,
        )
    }
}

impl From<&Product> for ProductEntity {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            code: product.code.clone(),
            stock: product.stock,
        }
    }
}
