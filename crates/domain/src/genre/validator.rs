//! Field-level rules for genres.

use crate::error::DomainError;
use crate::validation::{ValidationHandler, Validator, check_name};

use super::Genre;

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

pub struct GenreValidator<'a, H: ValidationHandler> {
    genre: &'a Genre,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> GenreValidator<'a, H> {
    pub fn new(genre: &'a Genre, handler: &'a mut H) -> Self {
        Self { genre, handler }
    }
}

impl<H: ValidationHandler> Validator for GenreValidator<'_, H> {
    fn validate(&mut self) -> Result<(), DomainError> {
        check_name(
            self.genre.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
            &mut *self.handler,
        )
    }
}
