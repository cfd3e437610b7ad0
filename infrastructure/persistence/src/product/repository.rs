use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::{NewProduct, Product, ProductPatch, next_product_id};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::store_file::{
    LoadOutcome, SaveOutcome, StoreFileConfig, StoreFileError, read_collection, write_collection,
};

/// Product catalog held in memory and mirrored to a single JSON file.
///
/// Every mutation holds the write lock across modify and save, so ids are
/// never computed twice and the file is never written concurrently. Load and
/// save failures are logged and swallowed: the in-memory collection stays
/// authoritative for the life of the process.
pub struct ProductRepositoryJson {
    path: PathBuf,
    products: RwLock<Vec<Product>>,
    logger: Arc<dyn Logger>,
}

impl ProductRepositoryJson {
    /// Creates the repository and performs the initial load.
    pub async fn open(config: StoreFileConfig, logger: Arc<dyn Logger>) -> Self {
        let repository = Self {
            path: config.path,
            products: RwLock::new(Vec::new()),
            logger,
        };
        repository.load().await;
        repository
    }

    /// Replaces the in-memory collection with the contents of the backing file.
    ///
    /// Never fails: any problem leaves the collection empty.
    pub async fn load(&self) -> LoadOutcome {
        let mut products = self.products.write().await;

        match read_collection::<ProductEntity>(&self.path) {
            Ok(entities) => {
                *products = entities.into_iter().map(|e| e.into_domain()).collect();
                self.logger.info(&format!(
                    "Loaded {} products from {}",
                    products.len(),
                    self.path.display()
                ));
                LoadOutcome::Loaded(products.len())
            }
            Err(StoreFileError::Missing) => {
                products.clear();
                self.logger.warn(&format!(
                    "Products file {} not found, starting with an empty catalog",
                    self.path.display()
                ));
                LoadOutcome::Missing
            }
            Err(StoreFileError::Io(e)) => {
                products.clear();
                self.logger.error(&format!(
                    "Failed to read products file {}: {}",
                    self.path.display(),
                    e
                ));
                LoadOutcome::Unreadable
            }
            Err(StoreFileError::Json(e)) => {
                products.clear();
                self.logger.error(&format!(
                    "Products file {} is not a valid product list: {}",
                    self.path.display(),
                    e
                ));
                LoadOutcome::Corrupt
            }
        }
    }

    /// Writes the whole collection back to the backing file.
    pub async fn save(&self) -> SaveOutcome {
        let products = self.products.read().await;
        self.persist(&products)
    }

    fn persist(&self, products: &[Product]) -> SaveOutcome {
        let entities: Vec<ProductEntity> = products.iter().map(ProductEntity::from).collect();

        match write_collection(&self.path, &entities) {
            Ok(()) => {
                self.logger.debug(&format!(
                    "Saved {} products to {}",
                    entities.len(),
                    self.path.display()
                ));
                SaveOutcome::Saved
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to save products to {}: {}",
                    self.path.display(),
                    e
                ));
                SaveOutcome::Failed
            }
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        let id = next_product_id(&products).ok_or(RepositoryError::IdsExhausted)?;
        let product = Product::from_new(id, product);
        products.push(product.clone());
        self.persist(&products);

        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply(patch);
        let updated = product.clone();

        self.persist(&products);
        Ok(updated)
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;

        products.retain(|p| p.id != id);
        self.persist(&products);

        Ok(())
    }
}
