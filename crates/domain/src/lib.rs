//! Domain layer for the catalog admin service.
//!
//! This crate provides the core domain abstractions including:
//! - Identifier and AggregateRoot traits shared by every aggregate
//! - ValidationHandler with accumulating (Notification) and fail-fast variants
//! - Category, Genre and CastMember aggregates with their Validators
//! - Gateway traits describing the storage each aggregate needs

pub mod aggregate;
pub mod cast_member;
pub mod category;
pub mod error;
pub mod genre;
pub mod identifier;
pub mod validation;

pub use aggregate::{ActivationStatus, AggregateRoot, now};
pub use cast_member::{CastMember, CastMemberGateway, CastMemberId, CastMemberType};
pub use category::{Category, CategoryGateway, CategoryId};
pub use error::{DomainError, GatewayError};
pub use genre::{Genre, GenreGateway, GenreId};
pub use identifier::Identifier;
pub use validation::{Notification, ThrowsValidationHandler, ValidationHandler, Validator};
