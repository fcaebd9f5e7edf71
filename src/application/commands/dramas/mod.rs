mod create;
mod join;
mod service;

pub use create::CreateDramaCommand;
pub use join::JoinDramaCommand;
pub use service::DramaCommandService;
