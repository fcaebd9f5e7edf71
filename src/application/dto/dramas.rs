use crate::domain::drama::{Drama, Membership};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DramaDto {
    pub slug: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Drama> for DramaDto {
    fn from(drama: Drama) -> Self {
        Self {
            slug: drama.slug.into_inner(),
            title: drama.title.into_inner(),
            created_at: drama.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub drama_slug: String,
    pub user_id: String,
    pub color: String,
    pub joined_at: DateTime<Utc>,
}

impl From<Membership> for MembershipDto {
    fn from(membership: Membership) -> Self {
        Self {
            drama_slug: membership.drama_slug.into_inner(),
            user_id: membership.user_id.into_inner(),
            color: membership.color.into_inner(),
            joined_at: membership.joined_at,
        }
    }
}

/// Body of the membership color lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MembershipColorDto {
    pub color: String,
}
