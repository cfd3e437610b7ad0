use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
