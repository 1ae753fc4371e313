use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{
    AggregateRoot, CastMember, CastMemberGateway, CastMemberId, CastMemberType, GatewayError,
    Identifier,
};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::{like_pattern, limit_offset, order_by};
use crate::{Result, StorageError};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("created_at", "created_at"),
    ("createdAt", "created_at"),
];

const FILTER: &str = "WHERE (NOT $1 OR LOWER(name) LIKE $2)";

/// PostgreSQL-backed cast member storage.
#[derive(Clone)]
pub struct PostgresCastMemberGateway {
    pool: PgPool,
}

impl PostgresCastMemberGateway {
    /// Creates a new gateway over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_member(row: PgRow) -> Result<CastMember> {
        let kind: String = row.try_get("type")?;
        let kind = kind.parse::<CastMemberType>().map_err(StorageError::Decode)?;

        Ok(CastMember::with(
            CastMemberId::from_string(row.try_get::<String, _>("id")?),
            row.try_get::<String, _>("name")?,
            kind,
            row.try_get("created_at")?,
            row.try_get("updated_at")?,
        ))
    }

    fn kind_of(member: &CastMember) -> Result<&'static str> {
        member
            .kind()
            .map(|kind| kind.as_str())
            .ok_or_else(|| StorageError::Decode(format!("cast member {} has no type", member.id())))
    }

    async fn insert(&self, member: &CastMember) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cast_members (id, name, type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member.id().value())
        .bind(member.name())
        .bind(Self::kind_of(member)?)
        .bind(member.created_at())
        .bind(member.updated_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn replace(&self, member: &CastMember) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE cast_members
            SET name = $2, type = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(member.id().value())
        .bind(member.name())
        .bind(Self::kind_of(member)?)
        .bind(member.updated_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn select_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM cast_members
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_member).transpose()
    }

    async fn delete(&self, id: &CastMemberId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cast_members WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn select_page(&self, query: &SearchQuery) -> Result<Pagination<CastMember>> {
        let pattern = like_pattern(&query.terms);
        let (limit, offset) = limit_offset(query);

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM cast_members {FILTER}"))
                .bind(query.has_terms())
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

        let sql = format!(
            "SELECT id, name, type, created_at, updated_at \
             FROM cast_members {FILTER} ORDER BY {} LIMIT $3 OFFSET $4",
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
            .map(Self::row_to_member)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(total, returned = items.len(), "listed cast members");
        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }
}

#[async_trait]
impl CastMemberGateway for PostgresCastMemberGateway {
    async fn create(&self, member: CastMember) -> std::result::Result<CastMember, GatewayError> {
        self.insert(&member).await?;
        Ok(member)
    }

    async fn update(&self, member: CastMember) -> std::result::Result<CastMember, GatewayError> {
        self.replace(&member).await?;
        Ok(member)
    }

    async fn find_by_id(
        &self,
        id: &CastMemberId,
    ) -> std::result::Result<Option<CastMember>, GatewayError> {
        Ok(self.select_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> std::result::Result<bool, GatewayError> {
        Ok(self.delete(id).await?)
    }

    async fn find_all(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<Pagination<CastMember>, GatewayError> {
        Ok(self.select_page(query).await?)
    }
}
