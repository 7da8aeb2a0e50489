//! Identity provider collaborator.
//!
//! Authentication is delegated to a third-party identity service. This
//! module only resolves an opaque session token to a stable external user
//! id; everything behind that call is the provider's business.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// Errors from the identity provider collaborator.
///
/// An unresolvable token is NOT an error: `resolve` returns `Ok(None)` for
/// that. Errors here mean the provider itself misbehaved.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Transport-level failure talking to the provider.
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with an unexpected status.
    #[error("identity provider returned status {0}")]
    UnexpectedStatus(u16),
}

/// Resolves opaque session tokens to external user ids.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a session token.
    ///
    /// Returns `Ok(Some(auth_id))` for a valid token, `Ok(None)` for an
    /// invalid or expired one.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] only when the provider itself fails.
    async fn resolve(&self, token: &str) -> Result<Option<String>, IdentityError>;
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user_id: String,
}

/// HTTP client for the hosted identity provider.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl HttpIdentityProvider {
    /// Create a new provider client.
    #[must_use]
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve(&self, token: &str) -> Result<Option<String>, IdentityError> {
        let response = self
            .client
            .post(format!("{}/v1/sessions/verify", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let body: VerifyResponse = response.json().await?;
                Ok(Some(body.user_id))
            }
            // Provider's way of saying "token unknown/expired".
            401 | 404 => Ok(None),
            status => Err(IdentityError::UnexpectedStatus(status)),
        }
    }
}
