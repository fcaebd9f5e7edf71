pub mod entity;
pub mod repository;
pub mod value_objects;
pub mod vote;

pub use entity::{AuthorRef, DramaRef, NewPost, Post, PostFilter, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostContent, PostId, PostTitle};
pub use vote::{VoteChange, VoteValue, VoterRecord};
