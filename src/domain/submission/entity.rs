// src/domain/submission/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::{FormId, FormSlug};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SubmissionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<SubmissionId> for Uuid {
    fn from(value: SubmissionId) -> Self {
        value.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Answers keyed by question id.
pub type Answers = Map<String, Value>;

/// Accept only a JSON object as the answer payload.
pub fn answers_from_value(value: Value) -> DomainResult<Answers> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DomainError::Validation(
            "response must be a JSON object keyed by question id".into(),
        )),
    }
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub form_id: FormId,
    pub form_slug: FormSlug,
    pub answers: Answers,
    pub submitted_by: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub id: SubmissionId,
    pub form_id: FormId,
    pub form_slug: FormSlug,
    pub answers: Answers,
    pub submitted_by: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
