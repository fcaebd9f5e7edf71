use super::DramaQueryService;
use crate::{
    application::{
        dto::DramaDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::drama::DramaSlug,
};

pub struct GetDramaBySlugQuery {
    pub slug: String,
}

impl DramaQueryService {
    pub async fn get_drama_by_slug(&self, query: GetDramaBySlugQuery) -> ApplicationResult<DramaDto> {
        let slug = DramaSlug::new(query.slug)?;
        let drama = self
            .drama_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("drama not found"))?;
        Ok(drama.into())
    }
}
