use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostFilter, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::post::vote::{VoteChange, VoteValue};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `NotFound` when the post is gone.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    /// Reconciles the voter list and count as one atomic step.
    async fn apply_vote(
        &self,
        id: PostId,
        user: &UserId,
        intent: Option<VoteValue>,
    ) -> DomainResult<(Post, VoteChange)>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    /// Newest first.
    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>>;
}
