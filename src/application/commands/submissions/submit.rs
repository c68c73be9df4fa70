// src/application/commands/submissions/submit.rs
use super::SubmissionCommandService;
use crate::{
    application::{
        commands::forms::access::find_form,
        dto::{AuthenticatedUser, SubmissionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::submission::{NewSubmission, SubmissionId, entity::answers_from_value},
};
use serde_json::Value;

pub struct SubmitResponseCommand {
    pub slug: String,
    pub answers: Value,
}

impl SubmissionCommandService {
    pub async fn submit_response(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: SubmitResponseCommand,
    ) -> ApplicationResult<SubmissionDto> {
        let form = find_form(self.form_repo.as_ref(), command.slug).await?;

        if !form.is_published() {
            let is_owner = actor.is_some_and(|user| form.is_owned_by(&user.subject));
            return Err(if is_owner {
                ApplicationError::conflict("form is not accepting responses")
            } else {
                ApplicationError::not_found("form not found")
            });
        }

        let answers = answers_from_value(command.answers)?;
        form.validate_answers(&answers)?;

        let submission = NewSubmission {
            id: SubmissionId::generate(),
            form_id: form.id,
            form_slug: form.slug,
            answers,
            submitted_by: actor.map(|user| user.subject.clone()),
            submitted_at: self.clock.now(),
        };

        let stored = self.submission_repo.insert(submission).await?;
        tracing::info!(
            form_slug = %stored.form_slug,
            submission_id = %stored.id,
            "response submitted"
        );
        Ok(stored.into())
    }
}
