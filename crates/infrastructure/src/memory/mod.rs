//! In-memory gateway implementations.
//!
//! Each gateway keeps its aggregates behind an `Arc<RwLock<..>>`, so clones
//! share the same storage.

mod cast_member;
mod category;
mod genre;

pub use cast_member::InMemoryCastMemberGateway;
pub use category::InMemoryCategoryGateway;
pub use genre::InMemoryGenreGateway;
