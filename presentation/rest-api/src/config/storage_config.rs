use std::env;
use std::path::PathBuf;

use persistence::store_file::StoreFileConfig;

/// Location of the JSON products file
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub products_file: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCTS_FILE: Path of the products JSON file (default: "productos.json")
    pub fn from_env() -> Self {
        let products_file =
            env::var("PRODUCTS_FILE").unwrap_or_else(|_| "productos.json".to_string());

        Self {
            products_file: PathBuf::from(products_file),
        }
    }

    pub fn store_file(&self) -> StoreFileConfig {
        StoreFileConfig::new(self.products_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_store_file_config_from_path() {
        let config = StorageConfig {
            products_file: PathBuf::from("/var/lib/catalog/products.json"),
        };

        let store = config.store_file();

        assert_eq!(store.path, PathBuf::from("/var/lib/catalog/products.json"));
    }
}
