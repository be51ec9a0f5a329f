//! REST client for the external identity provider.
//!
//! Accounts, passwords, and profiles all live with the provider; the app
//! only exchanges credentials for a profile at login and resolves
//! participant emails to user ids when building a private meeting.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::identity::Identity;

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
    username: String,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    emails: &'a [String],
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<ProfileResponse>,
}

impl From<ProfileResponse> for Identity {
    fn from(p: ProfileResponse) -> Self {
        Identity {
            id: p.id,
            username: p.username,
            avatar_url: p.avatar_url,
            guest: false,
        }
    }
}

impl IdentityClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.identity_api_url.trim_end_matches('/').to_string(),
            api_key: config.identity_api_key.clone(),
        }
    }

    /// `POST /v1/sessions` — exchange credentials for a profile.
    /// A 401 means bad credentials, not a failure.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, AppError> {
        let url = format!("{}/v1/sessions", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CredentialsRequest { email, password })
            .send()
            .await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let profile: ProfileResponse = resp.error_for_status()?.json().await?;
        Ok(Some(profile.into()))
    }

    /// `POST /v1/users/lookup` — resolve participant emails to identities.
    /// Emails the provider does not know are dropped from the response.
    pub async fn resolve_emails(&self, emails: &[String]) -> Result<Vec<Identity>, AppError> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/v1/users/lookup", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&LookupRequest { emails })
            .send()
            .await?
            .error_for_status()?;
        let body: LookupResponse = resp.json().await?;
        Ok(body.users.into_iter().map(Identity::from).collect())
    }
}
