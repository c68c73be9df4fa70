// src/infrastructure/repositories/postgres_submission.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::{FormId, FormSlug};
use crate::domain::submission::{
    NewSubmission, Submission, SubmissionId, SubmissionRepository, entity::Answers,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: Uuid,
    form_id: Uuid,
    form_slug: String,
    answers: Json<Answers>,
    submitted_by: Option<String>,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = DomainError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        Ok(Submission {
            id: SubmissionId::from(row.id),
            form_id: FormId::from(row.form_id),
            form_slug: FormSlug::new(row.form_slug)?,
            answers: row.answers.0,
            submitted_by: row.submitted_by,
            submitted_at: row.submitted_at,
        })
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission> {
        let NewSubmission {
            id,
            form_id,
            form_slug,
            answers,
            submitted_by,
            submitted_at,
        } = submission;

        let row = sqlx::query_as::<_, SubmissionRow>(
            "INSERT INTO form_submissions (id, form_id, form_slug, answers, submitted_by, submitted_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, form_id, form_slug, answers, submitted_by, submitted_at",
        )
        .bind(Uuid::from(id))
        .bind(Uuid::from(form_id))
        .bind(form_slug.as_str())
        .bind(Json(&answers))
        .bind(submitted_by)
        .bind(submitted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Submission::try_from(row)
    }

    async fn list_by_form(&self, form_id: FormId) -> DomainResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, form_id, form_slug, answers, submitted_by, submitted_at
             FROM form_submissions WHERE form_id = $1
             ORDER BY submitted_at ASC, id ASC",
        )
        .bind(Uuid::from(form_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Submission::try_from).collect()
    }
}
