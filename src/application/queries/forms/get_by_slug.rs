use super::FormQueryService;
use crate::application::{
    commands::forms::access::find_form,
    dto::{AuthenticatedUser, FormDto},
    error::{ApplicationError, ApplicationResult},
};

pub struct GetFormBySlugQuery {
    pub slug: String,
}

impl FormQueryService {
    /// Published forms are public; drafts are visible to their owner only.
    pub async fn get_form_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetFormBySlugQuery,
    ) -> ApplicationResult<FormDto> {
        let form = find_form(self.read_repo.as_ref(), query.slug).await?;

        if !form.is_published() && !actor.is_some_and(|user| form.is_owned_by(&user.subject)) {
            return Err(ApplicationError::not_found("form not found"));
        }

        Ok(form.into())
    }
}
