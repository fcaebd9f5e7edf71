use super::DramaQueryService;
use crate::{
    application::{
        dto::MembershipColorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{drama::DramaSlug, user::UserId},
};

pub struct MembershipColorQuery {
    pub slug: String,
    pub user_id: String,
}

impl DramaQueryService {
    /// Color the user picked for the drama; not-found when the user never
    /// joined it.
    pub async fn membership_color(
        &self,
        query: MembershipColorQuery,
    ) -> ApplicationResult<MembershipColorDto> {
        let slug = DramaSlug::new(query.slug)?;
        let user_id = UserId::new(query.user_id)?;

        let membership = self
            .drama_repo
            .find_membership(&slug, &user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("membership not found"))?;

        Ok(MembershipColorDto {
            color: membership.color.into_inner(),
        })
    }
}
