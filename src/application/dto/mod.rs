pub mod dramas;
pub mod posts;

pub use dramas::{DramaDto, MembershipColorDto, MembershipDto};
pub use posts::{AuthorDto, DramaRefDto, PostDto, VoterDto};
