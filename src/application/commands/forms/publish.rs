// src/application/commands/forms/publish.rs
use super::{
    FormCommandService,
    access::{ensure_owner, find_form},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, FormDto},
        error::ApplicationResult,
    },
    domain::form::FormPublication,
};

pub struct SetPublishStateCommand {
    pub slug: String,
    pub publish: bool,
}

impl FormCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<FormDto> {
        let mut form = find_form(self.read_repo.as_ref(), command.slug).await?;
        ensure_owner(actor, &form)?;

        if form.is_published() == command.publish {
            return Ok(form.into());
        }

        let now = self.clock.now();
        if command.publish {
            form.publish(now)?;
        } else {
            form.unpublish(now);
        }

        let updated = self
            .write_repo
            .update_publication(FormPublication::from(&form))
            .await?;
        tracing::info!(form_slug = %updated.slug, status = %updated.status, "form publish state changed");
        Ok(updated.into())
    }
}
