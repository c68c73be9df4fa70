// src/application/commands/forms/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::form::{FormReadRepository, FormSlug, FormWriteRepository, services::FormSlugService},
};

pub struct FormCommandService {
    pub(super) write_repo: Arc<dyn FormWriteRepository>,
    pub(super) read_repo: Arc<dyn FormReadRepository>,
    pub(super) slug_service: Arc<FormSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    base_url: Option<String>,
}

impl FormCommandService {
    pub fn new(
        write_repo: Arc<dyn FormWriteRepository>,
        read_repo: Arc<dyn FormReadRepository>,
        slug_service: Arc<FormSlugService>,
        clock: Arc<dyn Clock>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            base_url,
        }
    }

    /// Editor location for a form; relative when no public base URL is set.
    pub fn edit_url(&self, slug: &FormSlug) -> String {
        let path = format!("/forms/{slug}");
        match self.base_url.as_deref() {
            Some(base) => format!("{}{path}", base.trim_end_matches('/')),
            None => path,
        }
    }
}
