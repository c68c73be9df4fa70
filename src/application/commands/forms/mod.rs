// src/application/commands/forms/mod.rs
pub(crate) mod access;
mod create;
mod delete;
mod publish;
mod service;

pub use create::{CreateFormCommand, CreateFormCommandBuilder, MAX_SLUG_ATTEMPTS};
pub use delete::DeleteFormCommand;
pub use publish::SetPublishStateCommand;
pub use service::FormCommandService;
