#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
