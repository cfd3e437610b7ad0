use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.debug("Fetching all products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, ProductPatch};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn phone(id: u64, title: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            title.to_string(),
            "Phone".to_string(),
            899.0,
            "/images/phone.jpg".to_string(),
            format!("P{}", id),
            15,
        )
    }

    #[tokio::test]
    async fn should_return_products_in_insertion_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                phone(1, "iPhone 12"),
                phone(2, "Samsung Galaxy S21"),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "iPhone 12");
        assert_eq!(products[1].title, "Samsung Galaxy S21");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_catalog_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
