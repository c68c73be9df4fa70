use std::sync::Arc;

use crate::domain::{form::FormReadRepository, submission::SubmissionRepository};

pub struct SubmissionQueryService {
    pub(super) form_repo: Arc<dyn FormReadRepository>,
    pub(super) submission_repo: Arc<dyn SubmissionRepository>,
}

impl SubmissionQueryService {
    pub fn new(
        form_repo: Arc<dyn FormReadRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            form_repo,
            submission_repo,
        }
    }
}
