//! Application error types.

use domain::validation::Error;
use domain::{DomainError, GatewayError};
use thiserror::Error;

/// Errors returned by use cases.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The command was rejected or its target does not exist.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage behind a gateway failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ApplicationError {
    /// Validation errors carried by this failure, in evaluation order.
    ///
    /// Gateway failures carry none.
    pub fn errors(&self) -> &[Error] {
        match self {
            ApplicationError::Domain(err) => err.errors(),
            ApplicationError::Gateway(_) => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Domain(err) if err.is_not_found())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApplicationError::Domain(err) if err.is_validation())
    }
}

/// Result type for use cases.
pub type Result<T> = std::result::Result<T, ApplicationError>;
