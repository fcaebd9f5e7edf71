pub mod dramas;
pub mod posts;
