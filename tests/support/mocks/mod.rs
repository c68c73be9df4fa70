// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::{InMemoryFormRepo, InMemorySubmissionRepo};
pub use security::StaticIdentityVerifier;
pub use time::{FixedClock, fixed_now};
