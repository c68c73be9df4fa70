// src/application/dto/submissions.rs
use crate::domain::submission::Submission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionDto {
    pub id: Uuid,
    pub form_id: Uuid,
    pub form_slug: String,
    #[schema(value_type = Object)]
    pub answers: Value,
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.into(),
            form_id: submission.form_id.into(),
            form_slug: submission.form_slug.into_inner(),
            answers: Value::Object(submission.answers),
            submitted_by: submission.submitted_by,
            submitted_at: submission.submitted_at,
        }
    }
}
