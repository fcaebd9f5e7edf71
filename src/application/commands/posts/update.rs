use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{PostContent, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl PostCommandService {
    /// Replaces title and content. Both must be non-empty; nothing is
    /// written when either is rejected.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::parse(&command.id)?;
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;

        let updated = self
            .write_repo
            .update(PostUpdate {
                id,
                title,
                content,
                edited_at: self.clock.now(),
            })
            .await?;

        Ok(updated.into())
    }
}
