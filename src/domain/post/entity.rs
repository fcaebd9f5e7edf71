// src/domain/post/entity.rs
use crate::domain::drama::DramaSlug;
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use crate::domain::post::vote::{self, VoteChange, VoteValue, VoterRecord};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DramaRef {
    pub slug: DramaSlug,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: AuthorRef,
    pub drama: DramaRef,
    pub votes: i64,
    pub voters: Vec<VoterRecord>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn from_new(post: NewPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            drama: post.drama,
            votes: 0,
            voters: Vec::new(),
            created_at: post.created_at,
            edited_at: None,
        }
    }

    pub fn user_vote(&self, user: &UserId) -> Option<VoteValue> {
        self.voters
            .iter()
            .find(|record| &record.user_id == user)
            .map(|record| record.vote)
    }

    /// Applies a vote request to the voter list and the count together.
    pub fn apply_vote(&mut self, user: &UserId, intent: Option<VoteValue>) -> VoteChange {
        let (change, delta) = vote::reconcile(&mut self.voters, user, intent);
        self.votes += delta;
        change
    }

    pub fn set_content(&mut self, title: PostTitle, content: PostContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.edited_at = Some(now);
    }

    pub fn votes_consistent(&self) -> bool {
        self.votes == vote::tally(&self.voters)
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: AuthorRef,
    pub drama: DramaRef,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub author_id: Option<UserId>,
    pub drama_slug: Option<DramaSlug>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn in_drama(mut self, slug: DramaSlug) -> Self {
        self.drama_slug = Some(slug);
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        let author_ok = self
            .author_id
            .as_ref()
            .is_none_or(|id| &post.author.id == id);
        let drama_ok = self
            .drama_slug
            .as_ref()
            .is_none_or(|slug| &post.drama.slug == slug);
        author_ok && drama_ok
    }
}
