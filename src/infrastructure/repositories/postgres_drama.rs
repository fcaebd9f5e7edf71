// src/infrastructure/repositories/postgres_drama.rs
use super::map_sqlx;
use crate::domain::drama::{
    Drama, DramaRepository, DramaSlug, DramaTitle, Membership, MembershipColor, NewDrama,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDramaRepository {
    pool: PgPool,
}

impl PostgresDramaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DramaRow {
    slug: String,
    title: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DramaRow> for Drama {
    type Error = DomainError;

    fn try_from(row: DramaRow) -> Result<Self, Self::Error> {
        Ok(Drama {
            slug: DramaSlug::new(row.slug)?,
            title: DramaTitle::new(row.title)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MembershipRow {
    drama_slug: String,
    user_id: String,
    color: String,
    joined_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(Membership {
            drama_slug: DramaSlug::new(row.drama_slug)?,
            user_id: UserId::new(row.user_id)?,
            color: MembershipColor::new(row.color)?,
            joined_at: row.joined_at,
        })
    }
}

#[async_trait]
impl DramaRepository for PostgresDramaRepository {
    async fn insert(&self, drama: NewDrama) -> DomainResult<Drama> {
        let row = sqlx::query_as::<_, DramaRow>(
            "INSERT INTO dramas (slug, title, created_at) VALUES ($1, $2, $3)
             RETURNING slug, title, created_at",
        )
        .bind(drama.slug.as_str())
        .bind(drama.title.as_str())
        .bind(drama.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Drama::try_from(row)
    }

    async fn find_by_slug(&self, slug: &DramaSlug) -> DomainResult<Option<Drama>> {
        let row = sqlx::query_as::<_, DramaRow>(
            "SELECT slug, title, created_at FROM dramas WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Drama::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Drama>> {
        let rows = sqlx::query_as::<_, DramaRow>(
            "SELECT slug, title, created_at FROM dramas ORDER BY slug",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Drama::try_from).collect()
    }

    async fn upsert_membership(&self, membership: Membership) -> DomainResult<Membership> {
        let row = sqlx::query_as::<_, MembershipRow>(
            "INSERT INTO drama_memberships (drama_slug, user_id, color, joined_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (drama_slug, user_id) DO UPDATE SET color = EXCLUDED.color
             RETURNING drama_slug, user_id, color, joined_at",
        )
        .bind(membership.drama_slug.as_str())
        .bind(membership.user_id.as_str())
        .bind(membership.color.as_str())
        .bind(membership.joined_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Membership::try_from(row)
    }

    async fn find_membership(
        &self,
        slug: &DramaSlug,
        user: &UserId,
    ) -> DomainResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            "SELECT drama_slug, user_id, color, joined_at FROM drama_memberships
             WHERE drama_slug = $1 AND user_id = $2",
        )
        .bind(slug.as_str())
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Membership::try_from).transpose()
    }
}
