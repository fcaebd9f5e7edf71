// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_drama;
mod postgres_post;

pub use error::map_sqlx;
pub use memory::InMemoryForumStore;
pub use postgres_drama::PostgresDramaRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
