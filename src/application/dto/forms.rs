// src/application/dto/forms.rs
use crate::domain::form::{Form, Question};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            kind: question.kind,
            label: question.label,
            required: question.required,
        }
    }
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Self {
            id: dto.id,
            kind: dto.kind,
            label: dto.label,
            required: dto.required,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_by: String,
    pub questions: Vec<QuestionDto>,
    /// `draft` or `published`.
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Form> for FormDto {
    fn from(form: Form) -> Self {
        Self {
            id: form.id.into(),
            name: form.name.into_inner(),
            slug: form.slug.into_inner(),
            created_by: form.created_by,
            questions: form
                .questions
                .into_inner()
                .into_iter()
                .map(Into::into)
                .collect(),
            status: form.status.as_str().to_owned(),
            published_at: form.published_at,
            created_at: form.created_at,
            updated_at: form.updated_at,
        }
    }
}

/// Returned from form creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFormResultDto {
    pub success: bool,
    pub form_id: Uuid,
    pub form_slug: String,
    pub edit_url: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
