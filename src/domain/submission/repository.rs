// src/domain/submission/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::form::FormId;
use crate::domain::submission::entity::{NewSubmission, Submission};
use async_trait::async_trait;

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission>;
    /// Submissions for a form, oldest first.
    async fn list_by_form(&self, form_id: FormId) -> DomainResult<Vec<Submission>>;
}
