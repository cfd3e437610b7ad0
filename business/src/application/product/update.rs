use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Fields are overwritten as given, no create-time validation here
        let patch = ProductPatch {
            title: params.title,
            description: params.description,
            price: params.price,
            thumbnail: params.thumbnail,
            code: params.code,
            stock: params.stock,
        };

        let updated_product = self
            .repository
            .update(params.id, patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("Product not found: {}", params.id));
                    ProductError::NotFound
                }
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
