use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{NewProduct, Product, ProductPatch};

/// Port for the authoritative product collection.
///
/// Implementations assign ids on `create`, keep insertion order for
/// `get_all`, and must not interleave two mutations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Absence is a normal outcome and is reported as `Ok(None)`.
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, RepositoryError>;
    /// Deleting an unknown id is a no-op.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
