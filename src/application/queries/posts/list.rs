use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{drama::DramaSlug, post::PostFilter, user::UserId},
};

/// Blank filter values are treated as absent.
#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub user_id: Option<String>,
    pub drama_slug: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let filter = Self::build_filter(query)?;
        let posts = self.read_repo.list(&filter).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    fn build_filter(query: ListPostsQuery) -> ApplicationResult<PostFilter> {
        let mut filter = PostFilter::all();
        if let Some(user_id) = non_blank(query.user_id) {
            filter = filter.by_author(UserId::new(user_id)?);
        }
        if let Some(slug) = non_blank(query.drama_slug) {
            filter = filter.in_drama(DramaSlug::new(slug)?);
        }
        Ok(filter)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
