use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::drama::DramaRepository,
};

pub struct DramaCommandService {
    pub(super) drama_repo: Arc<dyn DramaRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DramaCommandService {
    pub fn new(
        drama_repo: Arc<dyn DramaRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            drama_repo,
            slugger,
            clock,
        }
    }
}
