//! Shared types for the catalog admin service.
//!
//! Every "list" use case consumes a [`SearchQuery`] and produces a
//! [`Pagination`], regardless of the aggregate being listed.

pub mod pagination;

pub use pagination::{Direction, Pagination, SearchQuery};
