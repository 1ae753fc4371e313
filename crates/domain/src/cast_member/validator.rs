//! Field-level rules for cast members.

use crate::error::DomainError;
use crate::validation::{Error, ValidationHandler, Validator, check_name};

use super::CastMember;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

pub struct CastMemberValidator<'a, H: ValidationHandler> {
    member: &'a CastMember,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CastMemberValidator<'a, H> {
    pub fn new(member: &'a CastMember, handler: &'a mut H) -> Self {
        Self { member, handler }
    }

    fn check_kind(&mut self) -> Result<(), DomainError> {
        if self.member.kind().is_none() {
            self.handler
                .append(Error::new("'type' should not be null"))?;
        }
        Ok(())
    }
}

impl<H: ValidationHandler> Validator for CastMemberValidator<'_, H> {
    fn validate(&mut self) -> Result<(), DomainError> {
        check_name(
            self.member.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
            &mut *self.handler,
        )?;
        self.check_kind()
    }
}
