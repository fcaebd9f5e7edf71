use crate::domain::drama::value_objects::{DramaSlug, DramaTitle, MembershipColor};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Drama {
    pub slug: DramaSlug,
    pub title: DramaTitle,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDrama {
    pub slug: DramaSlug,
    pub title: DramaTitle,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Membership {
    pub drama_slug: DramaSlug,
    pub user_id: UserId,
    pub color: MembershipColor,
    pub joined_at: DateTime<Utc>,
}
