pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Drama, Membership, NewDrama};
pub use repository::DramaRepository;
pub use value_objects::{DramaSlug, DramaTitle, MembershipColor};
