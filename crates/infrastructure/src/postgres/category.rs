use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{
    ActivationStatus, AggregateRoot, Category, CategoryGateway, CategoryId, GatewayError,
    Identifier,
};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::{like_pattern, limit_offset, order_by};
use crate::Result;

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("description", "description"),
    ("created_at", "created_at"),
    ("createdAt", "created_at"),
];

const FILTER: &str =
    "WHERE (NOT $1 OR LOWER(name) LIKE $2 OR LOWER(COALESCE(description, '')) LIKE $2)";

/// PostgreSQL-backed category storage.
#[derive(Clone)]
pub struct PostgresCategoryGateway {
    pool: PgPool,
}

impl PostgresCategoryGateway {
    /// Creates a new gateway over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_category(row: PgRow) -> Result<Category> {
        Ok(Category::with(
            CategoryId::from_string(row.try_get::<String, _>("id")?),
            row.try_get::<String, _>("name")?,
            row.try_get("description")?,
            ActivationStatus::from_deleted_at(row.try_get("deleted_at")?),
            row.try_get("created_at")?,
            row.try_get("updated_at")?,
        ))
    }

    async fn insert(&self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(category.id().value())
        .bind(category.name())
        .bind(category.description())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn replace(&self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, description = $3, updated_at = $4, deleted_at = $5
            WHERE id = $1
            "#,
        )
        .bind(category.id().value())
        .bind(category.name())
        .bind(category.description())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn select_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_category).transpose()
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn select_page(&self, query: &SearchQuery) -> Result<Pagination<Category>> {
        let pattern = like_pattern(&query.terms);
        let (limit, offset) = limit_offset(query);

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM categories {FILTER}"))
            .bind(query.has_terms())
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT id, name, description, created_at, updated_at, deleted_at \
             FROM categories {FILTER} ORDER BY {} LIMIT $3 OFFSET $4",
            order_by(query, SORT_COLUMNS)
        );
        let rows = sqlx::query(&sql)
            .bind(query.has_terms())
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(Self::row_to_category)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(total, returned = items.len(), "listed categories");
        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }

    async fn select_existing(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();
        let found: Vec<String> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ANY($1)")
            .bind(values)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids
            .iter()
            .filter(|id| found.iter().any(|f| f == id.value()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryGateway for PostgresCategoryGateway {
    async fn create(&self, category: Category) -> std::result::Result<Category, GatewayError> {
        self.insert(&category).await?;
        Ok(category)
    }

    async fn update(&self, category: Category) -> std::result::Result<Category, GatewayError> {
        self.replace(&category).await?;
        Ok(category)
    }

    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> std::result::Result<Option<Category>, GatewayError> {
        Ok(self.select_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> std::result::Result<bool, GatewayError> {
        Ok(self.delete(id).await?)
    }

    async fn find_all(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<Pagination<Category>, GatewayError> {
        Ok(self.select_page(query).await?)
    }

    async fn exists_by_ids(
        &self,
        ids: &[CategoryId],
    ) -> std::result::Result<Vec<CategoryId>, GatewayError> {
        Ok(self.select_existing(ids).await?)
    }
}
