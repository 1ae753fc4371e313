//! Fail-fast validation handler.

use crate::error::DomainError;

use super::{Error, ValidationHandler};

/// Aborts on the first appended error.
///
/// Meant for direct, single-shot validity checks. Use cases never use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: Error) -> Result<&mut Self, DomainError> {
        Err(DomainError::with_error(error))
    }

    fn append_handler<H>(&mut self, other: &H) -> Result<&mut Self, DomainError>
    where
        H: ValidationHandler + ?Sized,
    {
        if other.has_error() {
            return Err(DomainError::Validation {
                message: String::new(),
                errors: other.errors().to_vec(),
            });
        }
        Ok(self)
    }

    fn validate<T, F>(&mut self, validation: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match validation() {
            Ok(value) => Ok(Some(value)),
            Err(err @ DomainError::Validation { .. }) => Err(err),
            Err(other) => Err(DomainError::with_error(Error::new(other.to_string()))),
        }
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Notification;

    #[test]
    fn append_aborts_on_first_error() {
        let mut handler = ThrowsValidationHandler;
        let err = handler.append(Error::new("boom")).unwrap_err();
        assert_eq!(err.errors(), &[Error::new("boom")]);
        assert!(!handler.has_error());
    }

    #[test]
    fn validate_propagates_structured_failure_unchanged() {
        let mut handler = ThrowsValidationHandler;
        let failure = DomainError::Validation {
            message: "Could not create".to_string(),
            errors: vec![Error::new("a"), Error::new("b")],
        };
        let expected = failure.clone();

        let result: Result<Option<()>, _> = handler.validate(move || Err(failure));

        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn validate_wraps_other_failure() {
        let mut handler = ThrowsValidationHandler;
        let result: Result<Option<()>, _> =
            handler.validate(|| Err(DomainError::not_found("Category", "1")));

        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.errors(), &[Error::new("Category with ID 1 was not found")]);
    }

    #[test]
    fn validate_passes_value_through() {
        let mut handler = ThrowsValidationHandler;
        assert_eq!(handler.validate(|| Ok("ok")).unwrap(), Some("ok"));
    }

    #[test]
    fn append_handler_raises_all_errors_of_other() {
        let mut other = Notification::create();
        other.append(Error::new("x")).unwrap();
        other.append(Error::new("y")).unwrap();

        let err = ThrowsValidationHandler.append_handler(&other).unwrap_err();
        assert_eq!(err.errors(), &[Error::new("x"), Error::new("y")]);
    }

    #[test]
    fn append_handler_with_clean_other_is_ok() {
        assert!(
            ThrowsValidationHandler
                .append_handler(&Notification::create())
                .is_ok()
        );
    }
}
