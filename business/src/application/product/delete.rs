use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Unknown ids are not an error here
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product, ProductPatch};
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

    #[tokio::test]
    async fn should_delete_product_without_checking_existence() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo
            .expect_delete()
            .withf(|id| *id == ProductId::new(2))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(2),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_twice() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().times(2).returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        for _ in 0..2 {
            let result = use_case
                .execute(DeleteProductParams {
                    id: ProductId::new(7),
                })
                .await;
            assert!(result.is_ok());
        }
    }
}
