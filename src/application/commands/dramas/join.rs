use super::DramaCommandService;
use crate::{
    application::{
        dto::MembershipDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        drama::{DramaSlug, Membership, MembershipColor},
        user::UserId,
    },
};

pub struct JoinDramaCommand {
    pub slug: String,
    pub user_id: String,
    pub color: String,
}

impl DramaCommandService {
    /// Joins a drama, or changes the member's color when already joined.
    pub async fn join_drama(&self, command: JoinDramaCommand) -> ApplicationResult<MembershipDto> {
        let slug = DramaSlug::new(command.slug)?;
        let user_id = UserId::new(command.user_id)?;
        let color = MembershipColor::new(command.color)?;

        let drama = self
            .drama_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("drama not found: {slug}")))?;

        let membership = self
            .drama_repo
            .upsert_membership(Membership {
                drama_slug: drama.slug,
                user_id,
                color,
                joined_at: self.clock.now(),
            })
            .await?;
        Ok(membership.into())
    }
}
