use thiserror::Error;

use crate::repository::RepositoryError;
use crate::services::seed::SeedError;

/// Errors surfaced by the service layer to the HTTP handlers and binaries.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist or is not visible.
    #[error("not found")]
    NotFound,
    /// The persistence layer failed; terminal for the current request.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
    /// Seed data could not be parsed or validated.
    #[error("seed data error: {0}")]
    Seed(#[from] SeedError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
