// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_FORM_PKEY: &str = "forms_pkey";
const CNT_FORM_SLUG: &str = "forms_slug_key";
const CNT_FORM_STATUS_CHECK: &str = "forms_status_chk";
const CNT_FORM_PUBLISHED_CHECK: &str = "forms_published_requires_timestamp_chk";
const CNT_SUBMISSION_FORM: &str = "form_submissions_form_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_FORM_SLUG => DomainError::DuplicateSlug("slug already exists".into()),
                    CNT_FORM_PKEY => DomainError::Conflict("form id already exists".into()),
                    CNT_SUBMISSION_FORM => DomainError::NotFound("form not found".into()),
                    CNT_FORM_STATUS_CHECK => {
                        DomainError::Validation("unknown form status".into())
                    }
                    CNT_FORM_PUBLISHED_CHECK => {
                        DomainError::Validation("published forms require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_become_persistence_errors() {
        let mapped = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, DomainError::Persistence(_)));

        let mapped = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }
}
