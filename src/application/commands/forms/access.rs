// src/application/commands/forms/access.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::form::{Form, FormReadRepository, FormSlug},
};

/// Resolve a slug taken from a request path. Anything that is not a valid
/// slug cannot name a stored form, so it reads as not found.
pub(crate) async fn find_form(
    read_repo: &dyn FormReadRepository,
    raw_slug: String,
) -> ApplicationResult<Form> {
    let slug = FormSlug::new(raw_slug).map_err(|_| ApplicationError::not_found("form not found"))?;
    read_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::not_found("form not found"))
}

pub(crate) fn ensure_owner(actor: &AuthenticatedUser, form: &Form) -> ApplicationResult<()> {
    if form.is_owned_by(&actor.subject) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("only the form owner may do this"))
    }
}
