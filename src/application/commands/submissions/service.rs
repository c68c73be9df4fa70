// src/application/commands/submissions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{form::FormReadRepository, submission::SubmissionRepository},
};

pub struct SubmissionCommandService {
    pub(super) form_repo: Arc<dyn FormReadRepository>,
    pub(super) submission_repo: Arc<dyn SubmissionRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubmissionCommandService {
    pub fn new(
        form_repo: Arc<dyn FormReadRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            form_repo,
            submission_repo,
            clock,
        }
    }
}
