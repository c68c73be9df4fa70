// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_form;
mod postgres_submission;

pub(crate) use error::map_sqlx;
pub use postgres_form::{PostgresFormReadRepository, PostgresFormWriteRepository};
pub use postgres_submission::PostgresSubmissionRepository;
