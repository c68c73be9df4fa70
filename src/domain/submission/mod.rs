// src/domain/submission/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewSubmission, Submission, SubmissionId};
pub use repository::SubmissionRepository;
