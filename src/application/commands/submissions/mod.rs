// src/application/commands/submissions/mod.rs
mod service;
mod submit;

pub use service::SubmissionCommandService;
pub use submit::SubmitResponseCommand;
