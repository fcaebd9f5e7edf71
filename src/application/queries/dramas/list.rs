use super::DramaQueryService;
use crate::application::{dto::DramaDto, error::ApplicationResult};

impl DramaQueryService {
    pub async fn list_dramas(&self) -> ApplicationResult<Vec<DramaDto>> {
        let dramas = self.drama_repo.list().await?;
        Ok(dramas.into_iter().map(Into::into).collect())
    }
}
