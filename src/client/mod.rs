//! Headless client for the post list view: talks to the HTTP API and keeps
//! the list, per-user vote state, drama colors and edit drafts in sync by
//! re-fetching after every mutation.

pub mod api;
pub mod error;
pub mod feed;
pub mod prompt;

pub use api::{ForumApi, HttpForumApi, PostQuery, VotePayload};
pub use error::{ClientError, ClientResult};
pub use feed::{
    DeleteOutcome, EditDraft, FeedEntry, FeedMode, PostFeed, SaveOutcome, VoteDispatch,
    effective_vote,
};
pub use prompt::UserPrompt;
