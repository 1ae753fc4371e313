//! Field-level rules for categories.

use crate::error::DomainError;
use crate::validation::{ValidationHandler, Validator, check_name};

use super::Category;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

pub struct CategoryValidator<'a, H: ValidationHandler> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }
}

impl<H: ValidationHandler> Validator for CategoryValidator<'_, H> {
    fn validate(&mut self) -> Result<(), DomainError> {
        check_name(
            self.category.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
            &mut *self.handler,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Error, Notification};

    fn errors_for(name: &str) -> Vec<Error> {
        let category = Category::new_category(name, None, true);
        let mut notification = Notification::create();
        CategoryValidator::new(&category, &mut notification)
            .validate()
            .unwrap();
        notification.into_errors()
    }

    #[test]
    fn valid_name_has_no_errors() {
        assert!(errors_for("Filmes").is_empty());
    }

    #[test]
    fn empty_name() {
        assert_eq!(
            errors_for(""),
            vec![Error::new("'name' should not be empty")]
        );
    }

    #[test]
    fn short_name() {
        assert_eq!(
            errors_for("Fi "),
            vec![Error::new("'name' must be between 3 and 255 characters")]
        );
    }

    #[test]
    fn long_name() {
        assert_eq!(
            errors_for(&"x".repeat(256)),
            vec![Error::new("'name' must be between 3 and 255 characters")]
        );
    }
}
