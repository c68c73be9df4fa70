// src/domain/form/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::slug::{SlugOracle, allocate_unique};
use crate::domain::form::value_objects::{FormName, FormSlug};

/// Domain service responsible for producing unique slugs for forms.
pub struct FormSlugService {
    oracle: Arc<dyn SlugOracle>,
}

impl FormSlugService {
    pub fn new(oracle: Arc<dyn SlugOracle>) -> Self {
        Self { oracle }
    }

    /// Allocate a slug for `name`. A name that canonicalizes to nothing is
    /// rejected here rather than stored under an empty slug.
    pub async fn generate_unique_slug(&self, name: &FormName) -> DomainResult<FormSlug> {
        let allocated = allocate_unique(name.as_str(), self.oracle.as_ref()).await?;
        if allocated.is_empty() {
            return Err(DomainError::Validation(
                "form name must contain at least one letter or digit".into(),
            ));
        }
        FormSlug::new(allocated)
    }
}
