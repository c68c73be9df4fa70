// tests/support/mocks/repos.rs
use async_trait::async_trait;
use sforms_core::domain::errors::{DomainError, DomainResult};
use sforms_core::domain::form::{
    Form, FormId, FormName, FormPublication, FormReadRepository, FormSlug, FormStatus,
    FormWriteRepository, NewForm, Questions, SlugOracle,
};
use sforms_core::domain::submission::{NewSubmission, Submission, SubmissionRepository};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::time::fixed_now;

/// Form store with the same uniqueness rules as the `forms` table.
#[derive(Default)]
pub struct InMemoryFormRepo {
    forms: Mutex<Vec<Form>>,
    rival_inserts: AtomicUsize,
    slug_checks: AtomicUsize,
}

impl InMemoryFormRepo {
    /// For the next `count` inserts, a rival form grabs the same slug first.
    pub fn lose_next_inserts(&self, count: usize) {
        self.rival_inserts.store(count, Ordering::SeqCst);
    }

    pub fn seed(&self, slug: &str, owner: &str) {
        self.forms.lock().unwrap().push(rival_form(slug, owner));
    }

    pub fn slugs(&self) -> Vec<String> {
        self.forms
            .lock()
            .unwrap()
            .iter()
            .map(|form| form.slug.as_str().to_owned())
            .collect()
    }

    pub fn slug_checks(&self) -> usize {
        self.slug_checks.load(Ordering::SeqCst)
    }
}

fn rival_form(slug: &str, owner: &str) -> Form {
    Form {
        id: FormId::generate(),
        name: FormName::new(slug).unwrap(),
        slug: FormSlug::new(slug).unwrap(),
        created_by: owner.to_owned(),
        questions: Questions::default(),
        status: FormStatus::Draft,
        published_at: None,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

#[async_trait]
impl FormWriteRepository for InMemoryFormRepo {
    async fn insert(&self, form: NewForm) -> DomainResult<Form> {
        let mut forms = self.forms.lock().unwrap();

        let rivals = self.rival_inserts.load(Ordering::SeqCst);
        if rivals > 0 {
            self.rival_inserts.store(rivals - 1, Ordering::SeqCst);
            forms.push(rival_form(form.slug.as_str(), "rival"));
        }

        if forms.iter().any(|f| f.id == form.id) {
            return Err(DomainError::Conflict("form id already exists".into()));
        }
        if forms.iter().any(|f| f.slug == form.slug) {
            return Err(DomainError::DuplicateSlug(form.slug.into_inner()));
        }

        let stored = Form {
            id: form.id,
            name: form.name,
            slug: form.slug,
            created_by: form.created_by,
            questions: form.questions,
            status: form.status,
            published_at: form.published_at,
            created_at: form.created_at,
            updated_at: form.updated_at,
        };
        forms.push(stored.clone());
        Ok(stored)
    }

    async fn update_publication(&self, update: FormPublication) -> DomainResult<Form> {
        let mut forms = self.forms.lock().unwrap();
        let form = forms
            .iter_mut()
            .find(|f| f.id == update.id)
            .ok_or_else(|| DomainError::NotFound("form not found".into()))?;
        form.status = update.status;
        form.published_at = update.published_at;
        form.updated_at = update.updated_at;
        Ok(form.clone())
    }

    async fn delete(&self, id: FormId) -> DomainResult<()> {
        let mut forms = self.forms.lock().unwrap();
        let before = forms.len();
        forms.retain(|f| f.id != id);
        if forms.len() == before {
            return Err(DomainError::NotFound("form not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl FormReadRepository for InMemoryFormRepo {
    async fn find_by_slug(&self, slug: &FormSlug) -> DomainResult<Option<Form>> {
        let forms = self.forms.lock().unwrap();
        Ok(forms.iter().find(|f| &f.slug == slug).cloned())
    }

    async fn list_by_creator(&self, created_by: &str) -> DomainResult<Vec<Form>> {
        let forms = self.forms.lock().unwrap();
        let mut mine: Vec<Form> = forms
            .iter()
            .filter(|f| f.created_by == created_by)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }
}

#[async_trait]
impl SlugOracle for InMemoryFormRepo {
    async fn exists(&self, candidate: &str) -> DomainResult<bool> {
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        let forms = self.forms.lock().unwrap();
        Ok(forms.iter().any(|f| f.slug.as_str() == candidate))
    }
}

#[derive(Default)]
pub struct InMemorySubmissionRepo {
    submissions: Mutex<Vec<Submission>>,
}

impl InMemorySubmissionRepo {
    pub fn len(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepo {
    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission> {
        let stored = Submission {
            id: submission.id,
            form_id: submission.form_id,
            form_slug: submission.form_slug,
            answers: submission.answers,
            submitted_by: submission.submitted_by,
            submitted_at: submission.submitted_at,
        };
        self.submissions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_by_form(&self, form_id: FormId) -> DomainResult<Vec<Submission>> {
        let submissions = self.submissions.lock().unwrap();
        Ok(submissions
            .iter()
            .filter(|s| s.form_id == form_id)
            .cloned()
            .collect())
    }
}
