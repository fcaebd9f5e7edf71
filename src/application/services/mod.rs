// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{dramas::DramaCommandService, posts::PostCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{dramas::DramaQueryService, posts::PostQueryService},
    },
    domain::{
        drama::DramaRepository,
        post::{PostReadRepository, PostWriteRepository},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub drama_commands: Arc<DramaCommandService>,
    pub drama_queries: Arc<DramaQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        drama_repo: Arc<dyn DramaRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&drama_repo),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let drama_commands = Arc::new(DramaCommandService::new(
            Arc::clone(&drama_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let drama_queries = Arc::new(DramaQueryService::new(Arc::clone(&drama_repo)));

        Self {
            post_commands,
            post_queries,
            drama_commands,
            drama_queries,
        }
    }
}
