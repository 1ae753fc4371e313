//! Gateway implementations for the catalog admin service.
//!
//! - [`memory`] keeps aggregates in process; used by tests and by the server
//!   when no database is configured.
//! - [`postgres`] stores aggregates in PostgreSQL through sqlx.

pub mod error;
pub mod memory;
pub mod postgres;
mod search;

pub use error::{Result, StorageError};
pub use memory::{InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway};
pub use postgres::{
    PostgresCastMemberGateway, PostgresCategoryGateway, PostgresGenreGateway, run_migrations,
};
