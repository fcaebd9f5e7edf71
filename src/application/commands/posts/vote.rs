use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{
        post::{PostId, VoteValue},
        user::UserId,
    },
};

pub struct CastVoteCommand {
    pub post_id: String,
    pub user_id: String,
    /// `Some(1)`, `Some(-1)` or `None` to retract.
    pub vote: Option<i64>,
}

impl PostCommandService {
    /// Records, flips or retracts a user's vote. Sending the vote the user
    /// already has leaves the post untouched; clients toggle off by sending
    /// `None`.
    pub async fn cast_vote(&self, command: CastVoteCommand) -> ApplicationResult<PostDto> {
        let post_id = PostId::parse(&command.post_id)?;
        let user_id = UserId::new(command.user_id)?;
        let intent = VoteValue::from_wire(command.vote)?;

        let (post, change) = self
            .write_repo
            .apply_vote(post_id, &user_id, intent)
            .await?;

        tracing::debug!(
            post_id = %post_id,
            user_id = %user_id,
            ?change,
            votes = post.votes,
            "vote applied"
        );
        Ok(post.into())
    }
}
