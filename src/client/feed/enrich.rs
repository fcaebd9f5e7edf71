use super::PostFeed;
use crate::application::dto::PostDto;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::task::JoinSet;

impl PostFeed {
    /// Looks up the user's membership color for every distinct drama in
    /// `posts`, all at once. Lookups that fail are logged and left out.
    pub(super) async fn resolve_colors(&self, posts: &[PostDto]) -> HashMap<String, String> {
        let slugs: BTreeSet<&str> = posts
            .iter()
            .map(|post| post.drama.slug.as_str())
            .filter(|slug| !slug.trim().is_empty())
            .collect();

        let mut lookups = JoinSet::new();
        for slug in slugs {
            let api = Arc::clone(&self.api);
            let slug = slug.to_string();
            let user_id = self.user.id.as_str().to_string();
            lookups.spawn(async move {
                let color = api.membership_color(&slug, &user_id).await;
                (slug, color)
            });
        }

        let mut colors = HashMap::new();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((slug, Ok(color))) => {
                    colors.insert(slug, color);
                }
                Ok((slug, Err(err))) => {
                    tracing::warn!(drama = %slug, error = %err, "drama color lookup failed");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "drama color lookup task aborted");
                }
            }
        }
        colors
    }
}
