use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("identity provider api key is not configured")]
    NotConfigured,

    #[error("identity provider rejected the credentials: {0}")]
    Rejected(String),

    #[error("identity provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Email/password sign-in delegated to a third party. No session is kept.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Firebase Identity Toolkit `accounts:signInWithPassword`.
pub struct FirebaseIdentity {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl FirebaseIdentity {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.identity_endpoint, config.firebase_api_key.clone())
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let api_key = self.api_key.as_deref().ok_or(AuthError::NotConfigured)?;
        let url = format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.endpoint,
            urlencoding::encode(api_key)
        );

        let res = self
            .client
            .post(&url)
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if res.status().is_success() {
            // The id token in the body is not kept.
            return Ok(());
        }

        let status = res.status();
        let reason = match res.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.error.message,
            Err(_) => status.to_string(),
        };
        Err(AuthError::Rejected(reason))
    }
}

#[tokio::test]
async fn test_sign_in_without_api_key() {
    let identity = FirebaseIdentity::new("http://127.0.0.1:9", None);
    let err = identity.sign_in("a@b.c", "secret").await.unwrap_err();
    assert!(matches!(err, AuthError::NotConfigured));
}
