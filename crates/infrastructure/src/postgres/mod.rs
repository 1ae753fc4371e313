//! PostgreSQL-backed gateway implementations.

mod cast_member;
mod category;
mod genre;

pub use cast_member::PostgresCastMemberGateway;
pub use category::PostgresCategoryGateway;
pub use genre::PostgresGenreGateway;

use common::SearchQuery;
use sqlx::PgPool;

use crate::Result;

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Builds a `LIKE` pattern matching `terms` anywhere, with wildcards escaped.
fn like_pattern(terms: &str) -> String {
    let escaped = terms
        .trim()
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Resolves the `ORDER BY` clause for a query.
///
/// Sort keys are matched against `columns`; anything else sorts by `name`.
fn order_by(query: &SearchQuery, columns: &[(&str, &'static str)]) -> String {
    let column = columns
        .iter()
        .find(|(key, _)| *key == query.sort)
        .map(|(_, column)| *column)
        .unwrap_or("name");
    format!("{column} {}, id ASC", query.direction.as_sql())
}

fn limit_offset(query: &SearchQuery) -> (i64, i64) {
    let limit = i64::from(query.per_page);
    let offset = i64::try_from(query.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}
