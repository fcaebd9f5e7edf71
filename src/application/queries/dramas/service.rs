use std::sync::Arc;

use crate::domain::drama::DramaRepository;

pub struct DramaQueryService {
    pub(super) drama_repo: Arc<dyn DramaRepository>,
}

impl DramaQueryService {
    pub fn new(drama_repo: Arc<dyn DramaRepository>) -> Self {
        Self { drama_repo }
    }
}
