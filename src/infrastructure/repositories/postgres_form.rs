// src/infrastructure/repositories/postgres_form.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::{
    Form, FormId, FormName, FormPublication, FormReadRepository, FormSlug, FormWriteRepository,
    NewForm, Question, Questions, SlugOracle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

const FORM_COLUMNS: &str =
    "id, name, slug, created_by, questions, status, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFormWriteRepository {
    pool: PgPool,
}

impl PostgresFormWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresFormReadRepository {
    pool: PgPool,
}

impl PostgresFormReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FormRow {
    id: Uuid,
    name: String,
    slug: String,
    created_by: String,
    questions: Json<Vec<Question>>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FormRow> for Form {
    type Error = DomainError;

    fn try_from(row: FormRow) -> Result<Self, Self::Error> {
        Ok(Form {
            id: FormId::from(row.id),
            name: FormName::new(row.name)?,
            slug: FormSlug::new(row.slug)?,
            created_by: row.created_by,
            questions: Questions::new(row.questions.0)?,
            status: row.status.parse()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FormWriteRepository for PostgresFormWriteRepository {
    async fn insert(&self, form: NewForm) -> DomainResult<Form> {
        let NewForm {
            id,
            name,
            slug,
            created_by,
            questions,
            status,
            published_at,
            created_at,
            updated_at,
        } = form;

        let row = sqlx::query_as::<_, FormRow>(&format!(
            "INSERT INTO forms (id, name, slug, created_by, questions, status, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {FORM_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_by.as_str())
        .bind(Json(questions.as_slice()))
        .bind(status.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::DuplicateSlug(_) => DomainError::DuplicateSlug(slug.to_string()),
            other => other,
        })?;

        Form::try_from(row)
    }

    async fn update_publication(&self, update: FormPublication) -> DomainResult<Form> {
        let FormPublication {
            id,
            status,
            published_at,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, FormRow>(&format!(
            "UPDATE forms SET status = $1, published_at = $2, updated_at = $3
             WHERE id = $4
             RETURNING {FORM_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(published_at)
        .bind(updated_at)
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("form not found".into()))?;

        Form::try_from(row)
    }

    async fn delete(&self, id: FormId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("form not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl FormReadRepository for PostgresFormReadRepository {
    async fn find_by_slug(&self, slug: &FormSlug) -> DomainResult<Option<Form>> {
        let row = sqlx::query_as::<_, FormRow>(&format!(
            "SELECT {FORM_COLUMNS} FROM forms WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Form::try_from).transpose()
    }

    async fn list_by_creator(&self, created_by: &str) -> DomainResult<Vec<Form>> {
        let rows = sqlx::query_as::<_, FormRow>(&format!(
            "SELECT {FORM_COLUMNS} FROM forms WHERE created_by = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(created_by)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Form::try_from).collect()
    }
}

#[async_trait]
impl SlugOracle for PostgresFormReadRepository {
    async fn exists(&self, candidate: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM forms WHERE slug = $1)")
            .bind(candidate)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
