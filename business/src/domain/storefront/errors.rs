#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("storefront.invalid_base_url")]
    InvalidBaseUrl,
    #[error("storefront.invalid_image_reference")]
    InvalidImageReference,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
