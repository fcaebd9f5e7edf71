mod get_by_slug;
mod list;
mod membership;
mod service;

pub use get_by_slug::GetDramaBySlugQuery;
pub use membership::MembershipColorQuery;
pub use service::DramaQueryService;
