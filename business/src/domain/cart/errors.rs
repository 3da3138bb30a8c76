#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
