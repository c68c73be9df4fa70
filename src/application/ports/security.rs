// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

/// Verifies bearer tokens minted by an external identity provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Return the identity carried by `token`, or `Unauthorized`.
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
