use std::collections::HashMap;

use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{
    ActivationStatus, AggregateRoot, CategoryId, GatewayError, Genre, GenreGateway, GenreId,
    Identifier,
};
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

use super::{like_pattern, limit_offset, order_by};
use crate::Result;

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("created_at", "created_at"),
    ("createdAt", "created_at"),
];

const FILTER: &str = "WHERE (NOT $1 OR LOWER(name) LIKE $2)";

/// PostgreSQL-backed genre storage.
///
/// Category links live in `genres_categories` and are rewritten as a whole,
/// inside the same transaction as the genre row, on every create and update.
#[derive(Clone)]
pub struct PostgresGenreGateway {
    pool: PgPool,
}

impl PostgresGenreGateway {
    /// Creates a new gateway over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_genre(row: &PgRow, categories: Vec<CategoryId>) -> Result<Genre> {
        Ok(Genre::with(
            GenreId::from_string(row.try_get::<String, _>("id")?),
            row.try_get::<String, _>("name")?,
            ActivationStatus::from_deleted_at(row.try_get("deleted_at")?),
            categories,
            row.try_get("created_at")?,
            row.try_get("updated_at")?,
        ))
    }

    async fn write_links(tx: &mut Transaction<'_, Postgres>, genre: &Genre) -> Result<()> {
        sqlx::query("DELETE FROM genres_categories WHERE genre_id = $1")
            .bind(genre.id().value())
            .execute(&mut **tx)
            .await?;

        for (position, category_id) in genre.categories().iter().enumerate() {
            sqlx::query(
                "INSERT INTO genres_categories (genre_id, category_id, position) VALUES ($1, $2, $3)",
            )
            .bind(genre.id().value())
            .bind(category_id.value())
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    async fn insert(&self, genre: &Genre) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO genres (id, name, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(genre.id().value())
        .bind(genre.name())
        .bind(genre.created_at())
        .bind(genre.updated_at())
        .bind(genre.deleted_at())
        .execute(&mut *tx)
        .await?;

        Self::write_links(&mut tx, genre).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn replace(&self, genre: &Genre) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE genres
            SET name = $2, updated_at = $3, deleted_at = $4
            WHERE id = $1
            "#,
        )
        .bind(genre.id().value())
        .bind(genre.name())
        .bind(genre.updated_at())
        .bind(genre.deleted_at())
        .execute(&mut *tx)
        .await?;

        Self::write_links(&mut tx, genre).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Loads category links for the given genres, keyed by genre id.
    async fn load_links(&self, genre_ids: Vec<String>) -> Result<HashMap<String, Vec<CategoryId>>> {
        let rows = sqlx::query(
            r#"
            SELECT genre_id, category_id
            FROM genres_categories
            WHERE genre_id = ANY($1)
            ORDER BY genre_id, position
            "#,
        )
        .bind(genre_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut links: HashMap<String, Vec<CategoryId>> = HashMap::new();
        for row in rows {
            let genre_id: String = row.try_get("genre_id")?;
            let category_id: String = row.try_get("category_id")?;
            links
                .entry(genre_id)
                .or_default()
                .push(CategoryId::from_string(category_id));
        }
        Ok(links)
    }

    async fn select_by_id(&self, id: &GenreId) -> Result<Option<Genre>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at, deleted_at
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut links = self.load_links(vec![id.value().to_string()]).await?;
        let categories = links.remove(id.value()).unwrap_or_default();
        Self::row_to_genre(&row, categories).map(Some)
    }

    async fn delete(&self, id: &GenreId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn select_page(&self, query: &SearchQuery) -> Result<Pagination<Genre>> {
        let pattern = like_pattern(&query.terms);
        let (limit, offset) = limit_offset(query);

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM genres {FILTER}"))
            .bind(query.has_terms())
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT id, name, created_at, updated_at, deleted_at \
             FROM genres {FILTER} ORDER BY {} LIMIT $3 OFFSET $4",
            order_by(query, SORT_COLUMNS)
        );
        let rows = sqlx::query(&sql)
            .bind(query.has_terms())
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let genre_ids = rows
            .iter()
            .map(|row| row.try_get::<String, _>("id"))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut links = self.load_links(genre_ids).await?;

        let items = rows
            .iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                let categories = links.remove(&id).unwrap_or_default();
                Self::row_to_genre(row, categories)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(total, returned = items.len(), "listed genres");
        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }
}

#[async_trait]
impl GenreGateway for PostgresGenreGateway {
    async fn create(&self, genre: Genre) -> std::result::Result<Genre, GatewayError> {
        self.insert(&genre).await?;
        Ok(genre)
    }

    async fn update(&self, genre: Genre) -> std::result::Result<Genre, GatewayError> {
        self.replace(&genre).await?;
        Ok(genre)
    }

    async fn find_by_id(&self, id: &GenreId) -> std::result::Result<Option<Genre>, GatewayError> {
        Ok(self.select_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: &GenreId) -> std::result::Result<bool, GatewayError> {
        Ok(self.delete(id).await?)
    }

    async fn find_all(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<Pagination<Genre>, GatewayError> {
        Ok(self.select_page(query).await?)
    }
}
