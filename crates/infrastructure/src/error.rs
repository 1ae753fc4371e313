use domain::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into an aggregate.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        GatewayError::new(err)
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
