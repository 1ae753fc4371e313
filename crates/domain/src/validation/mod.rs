//! Validation primitives.
//!
//! Validators write [`Error`]s into a [`ValidationHandler`]. The handler decides
//! whether to keep going ([`Notification`]) or to stop at the first error
//! ([`ThrowsValidationHandler`]), so the same rule code runs in both modes.

mod notification;
mod throws;

pub use notification::Notification;
pub use throws::ThrowsValidationHandler;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives validation errors.
///
/// `append` returns `Err` only for handlers that abort on the first error;
/// validators propagate it with `?` so they stop as soon as the handler asks.
pub trait ValidationHandler {
    /// Records one error.
    fn append(&mut self, error: Error) -> Result<&mut Self, DomainError>;

    /// Records every error held by `other`, after the ones already recorded.
    fn append_handler<H>(&mut self, other: &H) -> Result<&mut Self, DomainError>
    where
        H: ValidationHandler + ?Sized,
    {
        for error in other.errors() {
            self.append(error.clone())?;
        }
        Ok(self)
    }

    /// Runs `validation` and records whatever failure it returns.
    ///
    /// Returns the produced value when the validation succeeds.
    fn validate<T, F>(&mut self, validation: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>;

    /// Errors recorded so far, in the order they were appended.
    fn errors(&self) -> &[Error];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }
}

/// Field-level rules for one aggregate type.
pub trait Validator {
    fn validate(&mut self) -> Result<(), DomainError>;
}

/// Shared rule for `name` fields: not blank, trimmed length within bounds.
///
/// Only the first failing check is reported.
pub(crate) fn check_name<H: ValidationHandler>(
    name: &str,
    min_length: usize,
    max_length: usize,
    handler: &mut H,
) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        handler.append(Error::new("'name' should not be empty"))?;
        return Ok(());
    }

    let length = trimmed.chars().count();
    if length < min_length || length > max_length {
        handler.append(Error::new(format!(
            "'name' must be between {min_length} and {max_length} characters"
        )))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_name_rejects_blank() {
        let mut notification = Notification::create();
        check_name("   ", 3, 255, &mut notification).unwrap();
        assert_eq!(
            notification.errors(),
            &[Error::new("'name' should not be empty")]
        );
    }

    #[test]
    fn check_name_trims_before_measuring() {
        let mut notification = Notification::create();
        check_name("  ab  ", 3, 255, &mut notification).unwrap();
        assert_eq!(
            notification.errors(),
            &[Error::new("'name' must be between 3 and 255 characters")]
        );
    }

    #[test]
    fn check_name_counts_characters_not_bytes() {
        let mut notification = Notification::create();
        check_name("Ação", 3, 4, &mut notification).unwrap();
        assert!(!notification.has_error());
    }

    #[test]
    fn check_name_accepts_bounds() {
        let mut notification = Notification::create();
        check_name("abc", 3, 255, &mut notification).unwrap();
        check_name(&"a".repeat(255), 3, 255, &mut notification).unwrap();
        assert!(!notification.has_error());

        check_name(&"a".repeat(256), 3, 255, &mut notification).unwrap();
        assert!(notification.has_error());
    }

    #[test]
    fn check_name_ignores_surrounding_whitespace_at_upper_bound() {
        let mut notification = Notification::create();
        check_name(&format!("  {}  ", "a".repeat(255)), 3, 255, &mut notification).unwrap();
        assert!(!notification.has_error());
    }

    #[test]
    fn check_name_stops_fail_fast_handler() {
        let mut handler = ThrowsValidationHandler;
        let result = check_name("", 3, 255, &mut handler);
        assert_eq!(
            result,
            Err(DomainError::with_error(Error::new(
                "'name' should not be empty"
            )))
        );
    }

    #[test]
    fn error_display_is_message() {
        assert_eq!(Error::new("boom").to_string(), "boom");
    }
}
