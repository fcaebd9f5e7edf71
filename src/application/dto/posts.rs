use crate::domain::post::{Post, VoterRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DramaRefDto {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoterDto {
    pub user_id: String,
    /// `1` or `-1`.
    pub vote: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    #[serde(default)]
    pub drama: DramaRefDto,
    pub votes: i64,
    #[serde(default)]
    pub voters: Vec<VoterDto>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
}

impl PostDto {
    /// The recorded vote of `user_id`, if any.
    pub fn vote_of(&self, user_id: &str) -> Option<i8> {
        self.voters
            .iter()
            .find(|voter| voter.user_id == user_id)
            .map(|voter| voter.vote)
    }
}

impl From<VoterRecord> for VoterDto {
    fn from(record: VoterRecord) -> Self {
        Self {
            user_id: record.user_id.into_inner(),
            vote: record.vote.into(),
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            author: AuthorDto {
                id: post.author.id.into_inner(),
                username: post.author.username,
            },
            drama: DramaRefDto {
                slug: post.drama.slug.into_inner(),
                title: post.drama.title,
            },
            votes: post.votes,
            voters: post.voters.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
            edited_at: post.edited_at,
        }
    }
}
