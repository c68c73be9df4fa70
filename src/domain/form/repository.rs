// src/domain/form/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::form::entity::{Form, FormPublication, NewForm};
use crate::domain::form::value_objects::{FormId, FormSlug};
use async_trait::async_trait;

#[async_trait]
pub trait FormWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when the slug is already stored.
    async fn insert(&self, form: NewForm) -> DomainResult<Form>;
    async fn update_publication(&self, update: FormPublication) -> DomainResult<Form>;
    async fn delete(&self, id: FormId) -> DomainResult<()>;
}

#[async_trait]
pub trait FormReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &FormSlug) -> DomainResult<Option<Form>>;
    /// Forms created by `created_by`, newest first.
    async fn list_by_creator(&self, created_by: &str) -> DomainResult<Vec<Form>>;
}
