// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{forms::FormCommandService, submissions::SubmissionCommandService},
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{security::IdentityVerifier, time::Clock},
        queries::{forms::FormQueryService, submissions::SubmissionQueryService},
    },
    domain::{
        form::{FormReadRepository, FormWriteRepository, SlugOracle, services::FormSlugService},
        submission::SubmissionRepository,
    },
};

pub struct ApplicationServices {
    pub form_commands: Arc<FormCommandService>,
    pub form_queries: Arc<FormQueryService>,
    pub submission_commands: Arc<SubmissionCommandService>,
    pub submission_queries: Arc<SubmissionQueryService>,
    identity_verifier: Arc<dyn IdentityVerifier>,
}

impl ApplicationServices {
    pub fn new(
        form_write_repo: Arc<dyn FormWriteRepository>,
        form_read_repo: Arc<dyn FormReadRepository>,
        slug_oracle: Arc<dyn SlugOracle>,
        submission_repo: Arc<dyn SubmissionRepository>,
        identity_verifier: Arc<dyn IdentityVerifier>,
        clock: Arc<dyn Clock>,
        base_url: Option<String>,
    ) -> Self {
        let slug_service = Arc::new(FormSlugService::new(slug_oracle));

        let form_commands = Arc::new(FormCommandService::new(
            Arc::clone(&form_write_repo),
            Arc::clone(&form_read_repo),
            slug_service,
            Arc::clone(&clock),
            base_url,
        ));
        let form_queries = Arc::new(FormQueryService::new(Arc::clone(&form_read_repo)));

        let submission_commands = Arc::new(SubmissionCommandService::new(
            Arc::clone(&form_read_repo),
            Arc::clone(&submission_repo),
            Arc::clone(&clock),
        ));
        let submission_queries = Arc::new(SubmissionQueryService::new(
            Arc::clone(&form_read_repo),
            Arc::clone(&submission_repo),
        ));

        Self {
            form_commands,
            form_queries,
            submission_commands,
            submission_queries,
            identity_verifier,
        }
    }

    /// Resolve a raw bearer token into the caller's identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.identity_verifier.verify(token).await
    }
}
