// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod vote;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
pub use vote::CastVoteCommand;
