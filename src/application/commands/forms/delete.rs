// src/application/commands/forms/delete.rs
use super::{
    FormCommandService,
    access::{ensure_owner, find_form},
};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteFormCommand {
    pub slug: String,
}

impl FormCommandService {
    /// Delete a form together with its submissions.
    pub async fn delete_form(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteFormCommand,
    ) -> ApplicationResult<()> {
        let form = find_form(self.read_repo.as_ref(), command.slug).await?;
        ensure_owner(actor, &form)?;

        self.write_repo.delete(form.id).await?;
        tracing::info!(form_slug = %form.slug, "form deleted");
        Ok(())
    }
}
