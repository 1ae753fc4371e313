//! Application layer for the catalog admin service.
//!
//! Every mutation runs through a use case that validates the aggregate into a
//! single [`domain::Notification`], checks cross-aggregate references against
//! the owning gateway, and only then persists.

pub mod cast_member;
pub mod category;
pub mod error;
pub mod genre;
mod telemetry;
pub mod use_case;

#[cfg(test)]
mod testing;

pub use error::{ApplicationError, Result};
pub use use_case::UseCase;
