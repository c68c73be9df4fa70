// src/domain/mod.rs
pub mod errors;
pub mod form;
pub mod submission;
