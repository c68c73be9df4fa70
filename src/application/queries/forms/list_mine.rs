use super::FormQueryService;
use crate::application::{
    dto::{AuthenticatedUser, FormDto},
    error::ApplicationResult,
};

impl FormQueryService {
    pub async fn list_my_forms(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<FormDto>> {
        let forms = self.read_repo.list_by_creator(&actor.subject).await?;
        Ok(forms.into_iter().map(Into::into).collect())
    }
}
