use super::{PostFeed, recorded_vote};
use crate::client::api::VotePayload;
use crate::domain::post::VoteValue;

/// Result of activating a vote control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDispatch {
    /// A request went out; the list has been re-fetched either way.
    Sent {
        effective: Option<VoteValue>,
        succeeded: bool,
    },
    /// A vote for this post is still in flight or its re-fetch has not
    /// landed yet.
    Suppressed,
    UnknownPost,
}

/// Pressing the direction already recorded retracts it; anything else
/// casts or flips to the requested direction.
pub fn effective_vote(current: Option<VoteValue>, requested: VoteValue) -> Option<VoteValue> {
    if current == Some(requested) {
        None
    } else {
        Some(requested)
    }
}

/// Clears the post's in-flight mark even when the vote future is dropped.
struct InFlight<'a> {
    feed: &'a PostFeed,
    post_id: String,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.feed.state().in_flight.remove(&self.post_id);
    }
}

impl PostFeed {
    pub async fn toggle_vote(&self, post_id: &str, requested: VoteValue) -> VoteDispatch {
        let (effective, in_flight) = {
            let mut state = self.state();
            let Some(post) = state.posts.iter().find(|post| post.id == post_id) else {
                return VoteDispatch::UnknownPost;
            };
            let current = recorded_vote(post, self.user.id.as_str());
            if !state.in_flight.insert(post_id.to_string()) {
                tracing::debug!(post_id, "vote suppressed while previous request is pending");
                return VoteDispatch::Suppressed;
            }
            (
                effective_vote(current, requested),
                InFlight {
                    feed: self,
                    post_id: post_id.to_string(),
                },
            )
        };

        let payload = VotePayload {
            post_id: post_id.to_string(),
            user_id: self.user.id.as_str().to_string(),
            vote: effective,
        };
        let succeeded = match self.api.vote(&payload).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(post_id, error = %err, "vote request failed");
                false
            }
        };

        // Stays pending until the re-fetched list shows this vote.
        self.refresh().await;
        drop(in_flight);
        VoteDispatch::Sent {
            effective,
            succeeded,
        }
    }
}
