//! Domain error types.

use std::fmt::Display;

use thiserror::Error;

use crate::validation::{self, ValidationHandler};

/// Errors raised by domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// One or more validation errors, in evaluation order.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<validation::Error>,
    },

    /// An aggregate addressed by identifier does not exist.
    #[error("{0}")]
    NotFound(validation::Error),
}

impl DomainError {
    /// A validation failure carrying exactly one error.
    pub fn with_error(error: validation::Error) -> Self {
        DomainError::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// A validation failure carrying every error accumulated by `handler`.
    pub fn validation(message: impl Into<String>, handler: &impl ValidationHandler) -> Self {
        DomainError::Validation {
            message: message.into(),
            errors: handler.errors().to_vec(),
        }
    }

    /// A not-found failure for the given aggregate type and identifier.
    pub fn not_found(aggregate_type: &str, id: impl Display) -> Self {
        DomainError::NotFound(validation::Error::new(format!(
            "{aggregate_type} with ID {id} was not found"
        )))
    }

    /// Returns the ordered errors carried by this failure.
    pub fn errors(&self) -> &[validation::Error] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            DomainError::NotFound(error) => std::slice::from_ref(error),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

/// A failure raised by a gateway implementation.
///
/// The domain never builds one of these itself; storage backends wrap their
/// own errors in it and callers propagate it untouched.
#[derive(Debug, Error)]
#[error("Gateway error: {source}")]
pub struct GatewayError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl GatewayError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
