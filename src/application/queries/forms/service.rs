use std::sync::Arc;

use crate::domain::form::FormReadRepository;

pub struct FormQueryService {
    pub(super) read_repo: Arc<dyn FormReadRepository>,
}

impl FormQueryService {
    pub fn new(read_repo: Arc<dyn FormReadRepository>) -> Self {
        Self { read_repo }
    }
}
