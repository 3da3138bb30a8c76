/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.store_unavailable")]
    StoreUnavailable,
    #[error("repository.capacity_exceeded")]
    CapacityExceeded,
}
