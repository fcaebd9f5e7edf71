use crate::domain::drama::entity::{Drama, Membership, NewDrama};
use crate::domain::drama::value_objects::DramaSlug;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait DramaRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is taken.
    async fn insert(&self, drama: NewDrama) -> DomainResult<Drama>;
    async fn find_by_slug(&self, slug: &DramaSlug) -> DomainResult<Option<Drama>>;
    async fn list(&self) -> DomainResult<Vec<Drama>>;
    /// Inserts or replaces the membership for `(drama_slug, user_id)`.
    async fn upsert_membership(&self, membership: Membership) -> DomainResult<Membership>;
    async fn find_membership(
        &self,
        slug: &DramaSlug,
        user: &UserId,
    ) -> DomainResult<Option<Membership>>;
}
