use super::SubmissionQueryService;
use crate::application::{
    commands::forms::access::{ensure_owner, find_form},
    dto::{AuthenticatedUser, SubmissionDto},
    error::ApplicationResult,
};

pub struct ListSubmissionsQuery {
    pub slug: String,
}

impl SubmissionQueryService {
    pub async fn list_submissions(
        &self,
        actor: &AuthenticatedUser,
        query: ListSubmissionsQuery,
    ) -> ApplicationResult<Vec<SubmissionDto>> {
        let form = find_form(self.form_repo.as_ref(), query.slug).await?;
        ensure_owner(actor, &form)?;

        let submissions = self.submission_repo.list_by_form(form.id).await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }
}
