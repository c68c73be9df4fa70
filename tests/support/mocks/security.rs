// tests/support/mocks/security.rs
use async_trait::async_trait;
use sforms_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::IdentityVerifier,
};
use std::collections::HashMap;

pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

/// Maps fixed bearer tokens to subjects.
pub struct StaticIdentityVerifier {
    tokens: HashMap<String, String>,
}

impl Default for StaticIdentityVerifier {
    fn default() -> Self {
        Self {
            tokens: HashMap::from([
                (ALICE_TOKEN.to_string(), "alice".to_string()),
                (BOB_TOKEN.to_string(), "bob".to_string()),
            ]),
        }
    }
}

#[async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.tokens
            .get(token)
            .map(AuthenticatedUser::new)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
