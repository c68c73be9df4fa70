// src/infrastructure/security/identity.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::IdentityVerifier,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

/// Verifies Biscuit tokens sealed by the identity provider's Ed25519 root key.
///
/// The token must carry a `user($subject)` fact with a string subject. Any
/// checks embedded in the token (expiry and the like) run against the current
/// time.
#[derive(Clone)]
pub struct BiscuitIdentityVerifier {
    public: PublicKey,
}

impl BiscuitIdentityVerifier {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { public })
    }
}

#[async_trait]
impl IdentityVerifier for BiscuitIdentityVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($subject)")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let subjects: Vec<(String,)> = authorizer
            .query("data($subject) <- user($subject)")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        match subjects.as_slice() {
            [(subject,)] if !subject.is_empty() => Ok(AuthenticatedUser::new(subject.clone())),
            [] | [_] => Err(ApplicationError::unauthorized("token carries no subject")),
            _ => Err(ApplicationError::unauthorized(
                "token carries more than one subject",
            )),
        }
    }
}
