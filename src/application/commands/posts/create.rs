use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        drama::DramaSlug,
        post::{AuthorRef, DramaRef, NewPost, PostContent, PostId, PostTitle},
        user::UserId,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    pub drama_slug: String,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let author_id = UserId::new(command.author_id)?;
        let slug = DramaSlug::new(command.drama_slug)?;

        let drama = self
            .drama_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("drama not found: {slug}")))?;

        let post = NewPost {
            id: PostId::generate(),
            title,
            content,
            author: AuthorRef {
                id: author_id,
                username: command.author_username,
            },
            drama: DramaRef {
                slug: drama.slug,
                title: drama.title.into_inner(),
            },
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(post).await?;
        tracing::info!(post_id = %created.id, drama = %created.drama.slug, "post created");
        Ok(created.into())
    }
}
