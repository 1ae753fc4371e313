//! Genre use cases.
//!
//! Genres reference categories by identifier, so create and update check
//! those references before the genre's own fields.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase};
pub use delete::DeleteGenreUseCase;
pub use get::{GenreOutput, GetGenreUseCase};
pub use list::{GenreListOutput, ListGenresUseCase};
pub use update::{UpdateGenreCommand, UpdateGenreOutput, UpdateGenreUseCase};

use domain::validation::Error;
use domain::{CategoryGateway, CategoryId, Identifier, Notification, ValidationHandler};

use crate::Result;

fn to_category_ids(ids: &[String]) -> Vec<CategoryId> {
    ids.iter().map(CategoryId::from_string).collect()
}

/// Checks that every referenced category exists.
///
/// Missing identifiers are reported once each, in request order, as a single
/// error. An empty request never touches the gateway.
async fn validate_categories(
    gateway: &dyn CategoryGateway,
    ids: &[CategoryId],
) -> Result<Notification> {
    let mut notification = Notification::create();
    if ids.is_empty() {
        return Ok(notification);
    }

    let existing = gateway.exists_by_ids(ids).await?;
    let mut missing: Vec<&str> = Vec::new();
    for id in ids {
        if !existing.contains(id) && !missing.contains(&id.value()) {
            missing.push(id.value());
        }
    }

    if !missing.is_empty() {
        notification.append(Error::new(format!(
            "Some categories could not be found: {}",
            missing.join(",")
        )))?;
    }

    Ok(notification)
}
