use super::DramaCommandService;
use crate::{
    application::{
        dto::DramaDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::drama::{DramaSlug, DramaTitle, NewDrama},
};

pub struct CreateDramaCommand {
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
}

impl DramaCommandService {
    pub async fn create_drama(&self, command: CreateDramaCommand) -> ApplicationResult<DramaDto> {
        let title = DramaTitle::new(command.title)?;
        let raw_slug = match command.slug {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => {
                let derived = self.slugger.slugify(title.as_str());
                if derived.is_empty() {
                    return Err(ApplicationError::validation(
                        "title does not yield a usable slug; pass one explicitly",
                    ));
                }
                derived
            }
        };
        let slug = DramaSlug::new(raw_slug)?;

        if self.drama_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "drama slug already exists: {slug}"
            )));
        }

        let drama = self
            .drama_repo
            .insert(NewDrama {
                slug,
                title,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(drama = %drama.slug, "drama created");
        Ok(drama.into())
    }
}
