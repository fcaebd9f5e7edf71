// src/client/feed/mod.rs
mod edit;
mod enrich;
mod votes;

pub use edit::{DeleteOutcome, EditDraft, SaveOutcome};
pub use votes::{VoteDispatch, effective_vote};

use crate::application::dto::PostDto;
use crate::client::api::{ForumApi, PostQuery};
use crate::client::prompt::UserPrompt;
use crate::domain::post::VoteValue;
use crate::domain::user::CurrentUser;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Which posts the feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode {
    All,
    MyPosts,
    Drama(String),
}

impl FeedMode {
    fn query(&self, user: &CurrentUser) -> PostQuery {
        match self {
            FeedMode::All => PostQuery::default(),
            FeedMode::MyPosts => PostQuery {
                user_id: Some(user.id.as_str().to_string()),
                drama_slug: None,
            },
            FeedMode::Drama(slug) => PostQuery {
                user_id: None,
                drama_slug: Some(slug.clone()),
            },
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub post: PostDto,
    pub user_vote: Option<VoteValue>,
    /// Only resolved in [`FeedMode::All`].
    pub color: Option<String>,
    /// A vote request for this post is outstanding; the control should be
    /// disabled.
    pub vote_pending: bool,
}

#[derive(Default)]
struct FeedState {
    posts: Vec<PostDto>,
    colors: HashMap<String, String>,
    in_flight: HashSet<String>,
    draft: Option<EditDraft>,
    /// Tickets handed to `refresh` calls, and the newest one stored.
    issued: u64,
    applied: u64,
}

/// View-model behind the post list. The server stays authoritative: every
/// mutation is followed by a full re-fetch instead of a local patch.
pub struct PostFeed {
    api: Arc<dyn ForumApi>,
    prompt: Arc<dyn UserPrompt>,
    user: CurrentUser,
    mode: FeedMode,
    state: Mutex<FeedState>,
}

impl PostFeed {
    pub fn new(
        api: Arc<dyn ForumApi>,
        prompt: Arc<dyn UserPrompt>,
        user: CurrentUser,
        mode: FeedMode,
    ) -> Self {
        Self {
            api,
            prompt,
            user,
            mode,
            state: Mutex::new(FeedState::default()),
        }
    }

    pub fn mode(&self) -> &FeedMode {
        &self.mode
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-fetches the list for the current mode. A failed fetch keeps the
    /// previous list and is only logged. A response that arrives after a
    /// newer refresh was already stored is dropped. Returns whether the
    /// list was replaced.
    pub async fn refresh(&self) -> bool {
        let ticket = {
            let mut state = self.state();
            state.issued += 1;
            state.issued
        };
        let query = self.mode.query(&self.user);
        let posts = match self.api.list_posts(&query).await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!(error = %err, mode = ?self.mode, "failed to load posts");
                return false;
            }
        };

        let colors = if self.mode == FeedMode::All {
            self.resolve_colors(&posts).await
        } else {
            HashMap::new()
        };

        let mut state = self.state();
        if ticket < state.applied {
            tracing::debug!(ticket, applied = state.applied, "discarding stale post list");
            return false;
        }
        state.applied = ticket;
        state.posts = posts;
        state.colors = colors;
        true
    }

    pub fn entries(&self) -> Vec<FeedEntry> {
        let state = self.state();
        let user_id = self.user.id.as_str();
        state
            .posts
            .iter()
            .map(|post| FeedEntry {
                post: post.clone(),
                user_vote: recorded_vote(post, user_id),
                color: state.colors.get(&post.drama.slug).cloned(),
                vote_pending: state.in_flight.contains(&post.id),
            })
            .collect()
    }
}

fn recorded_vote(post: &PostDto, user_id: &str) -> Option<VoteValue> {
    post.vote_of(user_id)
        .and_then(|raw| VoteValue::try_from(raw).ok())
}
