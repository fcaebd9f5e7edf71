// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::drama::DramaSlug;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorRef, DramaRef, NewPost, Post, PostContent, PostFilter, PostId, PostReadRepository,
    PostTitle, PostUpdate, PostWriteRepository, VoteChange, VoteValue, VoterRecord,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, title, content, author_id, author_username, drama_slug, drama_title, votes, voters, created_at, edited_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: String,
    author_username: String,
    drama_slug: String,
    drama_title: String,
    votes: i64,
    voters: Json<Vec<VoterRecord>>,
    created_at: DateTime<Utc>,
    edited_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::from(row.id),
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            author: AuthorRef {
                id: UserId::new(row.author_id)?,
                username: row.author_username,
            },
            drama: DramaRef {
                slug: DramaSlug::new(row.drama_slug)?,
                title: row.drama_title,
            },
            votes: row.votes,
            voters: row.voters.0,
            created_at: row.created_at,
            edited_at: row.edited_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            id,
            title,
            content,
            author,
            drama,
            created_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (id, title, content, author_id, author_username, drama_slug, drama_title, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id.as_uuid())
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(author.id.as_str())
            .bind(&author.username)
            .bind(drama.slug.as_str())
            .bind(&drama.title)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            edited_at,
        } = update;

        let sql = format!(
            "UPDATE posts SET title = $2, content = $3, edited_at = $4 WHERE id = $1 RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id.as_uuid())
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(edited_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("post not found"))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("post not found"));
        }
        Ok(())
    }

    async fn apply_vote(
        &self,
        id: PostId,
        user: &UserId,
        intent: Option<VoteValue>,
    ) -> DomainResult<(Post, VoteChange)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Row lock serialises concurrent votes on the same post until commit.
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1 FOR UPDATE");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("post not found"))?;

        let mut post = Post::try_from(row)?;
        let change = post.apply_vote(user, intent);

        if !change.is_noop() {
            sqlx::query("UPDATE posts SET votes = $2, voters = $3 WHERE id = $1")
                .bind(id.as_uuid())
                .bind(post.votes)
                .bind(Json(&post.voters))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok((post, change))
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE TRUE"));

        if let Some(author_id) = &filter.author_id {
            builder.push(" AND author_id = ");
            builder.push_bind(author_id.as_str());
        }
        if let Some(slug) = &filter.drama_slug {
            builder.push(" AND drama_slug = ");
            builder.push_bind(slug.as_str());
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
