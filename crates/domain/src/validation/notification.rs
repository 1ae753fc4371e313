//! Error-accumulating validation handler.

use crate::error::DomainError;

use super::{Error, ValidationHandler};

/// Collects every validation error without ever stopping early.
///
/// Use cases create one per call and thread it through each validation step,
/// so field errors and cross-aggregate errors end up in one ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn from_error(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> Result<&mut Self, DomainError> {
        self.errors.push(error);
        Ok(self)
    }

    fn validate<T, F>(&mut self, validation: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match validation() {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation { errors, .. }) => {
                self.errors.extend(errors);
                Ok(None)
            }
            Err(other) => {
                self.errors.push(Error::new(other.to_string()));
                Ok(None)
            }
        }
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}
