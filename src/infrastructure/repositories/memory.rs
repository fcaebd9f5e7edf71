// src/infrastructure/repositories/memory.rs
use crate::domain::drama::{Drama, DramaRepository, DramaSlug, Membership, NewDrama};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
    VoteChange, VoteValue,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct ForumState {
    posts: HashMap<PostId, Post>,
    dramas: BTreeMap<DramaSlug, Drama>,
    memberships: HashMap<(DramaSlug, UserId), Membership>,
}

/// Process-local store used when no database is configured and in tests.
/// Every mutation runs under the write lock, so a vote updates the voter
/// list and the count together.
#[derive(Default)]
pub struct InMemoryForumStore {
    state: RwLock<ForumState>,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryForumStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.write().await;
        if !state.dramas.contains_key(&post.drama.slug) {
            return Err(DomainError::not_found("drama not found"));
        }
        if state.posts.contains_key(&post.id) {
            return Err(DomainError::Conflict("post id already exists".into()));
        }
        let post = Post::from_new(post);
        state.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::not_found("post not found"))?;
        post.set_content(update.title, update.content, update.edited_at);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("post not found"))
    }

    async fn apply_vote(
        &self,
        id: PostId,
        user: &UserId,
        intent: Option<VoteValue>,
    ) -> DomainResult<(Post, VoteChange)> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("post not found"))?;
        let change = post.apply_vote(user, intent);
        Ok((post.clone(), change))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryForumStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.state.read().await.posts.get(&id).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let state = self.state.read().await;
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_uuid().cmp(&a.id.as_uuid()))
        });
        Ok(posts)
    }
}

#[async_trait]
impl DramaRepository for InMemoryForumStore {
    async fn insert(&self, drama: NewDrama) -> DomainResult<Drama> {
        let mut state = self.state.write().await;
        if state.dramas.contains_key(&drama.slug) {
            return Err(DomainError::Conflict("drama slug already exists".into()));
        }
        let drama = Drama {
            slug: drama.slug,
            title: drama.title,
            created_at: drama.created_at,
        };
        state.dramas.insert(drama.slug.clone(), drama.clone());
        Ok(drama)
    }

    async fn find_by_slug(&self, slug: &DramaSlug) -> DomainResult<Option<Drama>> {
        Ok(self.state.read().await.dramas.get(slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Drama>> {
        Ok(self.state.read().await.dramas.values().cloned().collect())
    }

    async fn upsert_membership(&self, membership: Membership) -> DomainResult<Membership> {
        let mut state = self.state.write().await;
        if !state.dramas.contains_key(&membership.drama_slug) {
            return Err(DomainError::not_found("drama not found"));
        }
        let key = (membership.drama_slug.clone(), membership.user_id.clone());
        let stored = state
            .memberships
            .entry(key)
            .and_modify(|existing| existing.color = membership.color.clone())
            .or_insert(membership);
        Ok(stored.clone())
    }

    async fn find_membership(
        &self,
        slug: &DramaSlug,
        user: &UserId,
    ) -> DomainResult<Option<Membership>> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .get(&(slug.clone(), user.clone()))
            .cloned())
    }
}
