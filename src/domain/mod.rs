// src/domain/mod.rs
pub mod drama;
pub mod errors;
pub mod post;
pub mod user;
