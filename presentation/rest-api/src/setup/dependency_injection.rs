use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryJson;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Opens the products file and wires every use case around it.
    ///
    /// Returns only after the initial load has finished.
    pub async fn new(storage: &StorageConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let product_repository =
            Arc::new(ProductRepositoryJson::open(storage.store_file(), logger.clone()).await);

        Self::with_repository(product_repository, logger)
    }

    pub fn with_repository(
        product_repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self { product_api }
    }
}
