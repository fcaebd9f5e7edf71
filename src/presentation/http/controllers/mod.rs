// src/presentation/http/controllers/mod.rs
pub mod dramas;
pub mod posts;
