//! Bearer-token identity for the reports API.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

/// Authenticated caller. Reports are always scoped to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid or expired token")]
    InvalidToken,
}

/// Resolves a bearer token into an identity. Production deployments plug in
/// their identity provider here.
pub trait IdentityVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserIdentity, AuthError>;
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Fixed token table, seeded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityVerifier {
    tokens: HashMap<String, UserIdentity>,
}

impl StaticIdentityVerifier {
    pub fn new(tokens: impl IntoIterator<Item = (String, UserIdentity)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl IdentityVerifier for StaticIdentityVerifier {
    fn verify(&self, token: &str) -> Result<UserIdentity, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
