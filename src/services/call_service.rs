//! REST client for the external call service.
//!
//! The call service owns every meeting record and its live state; this
//! client is the only way the app reads or writes them. Requests carry the
//! API key as a query parameter and a short-lived server-signed bearer
//! token. The client is a cheap-clone handle constructed once in `main`
//! and handed to handlers via `web::Data`.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::meeting::{MeetingMember, MeetingRecord, MeetingVisibility};
use crate::services::token;

#[derive(Clone)]
pub struct CallServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCallRequest {
    pub visibility: MeetingVisibility,
    pub members: Vec<MeetingMember>,
    /// Always set: the scheduled time, or "now" for start-immediately.
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JoinCallRequest {
    pub audio: bool,
    pub video: bool,
}

/// The stream handle returned by a join handshake.
#[derive(Debug, Deserialize)]
pub struct CallSession {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
struct QueryCallsRequest<'a> {
    member: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryCallsResponse {
    #[serde(default)]
    calls: Vec<MeetingRecord>,
}

impl CallServiceClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.call_api_url.trim_end_matches('/').to_string(),
            api_key: config.call_api_key.clone(),
            api_secret: config.call_api_secret.clone(),
        }
    }

    /// Secret used to sign connection tokens handed to browsers.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    fn server_token(&self) -> Result<String, AppError> {
        token::issue(&self.api_secret, "server")
    }

    /// `POST /calls/{id}` — create a meeting record.
    pub async fn create(
        &self,
        id: &str,
        req: &CreateCallRequest,
    ) -> Result<MeetingRecord, AppError> {
        let url = format!("{}/calls/{}", self.base_url, id);
        let resp = self
            .http
            .post(&url)
            .query(&[("api_key", &self.api_key)])
            .bearer_auth(self.server_token()?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// `GET /calls/{id}` — fetch a meeting record; `None` on a lookup miss.
    pub async fn fetch(&self, id: &str) -> Result<Option<MeetingRecord>, AppError> {
        let url = format!("{}/calls/{}", self.base_url, id);
        let resp = self
            .http
            .get(&url)
            .query(&[("api_key", &self.api_key)])
            .bearer_auth(self.server_token()?)
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record = resp.error_for_status()?.json().await?;
        Ok(Some(record))
    }

    /// `POST /calls/{id}/join` — register the user in the call and get a
    /// stream handle back.
    pub async fn join(&self, id: &str, req: &JoinCallRequest) -> Result<CallSession, AppError> {
        let url = format!("{}/calls/{}/join", self.base_url, id);
        let resp = self
            .http
            .post(&url)
            .query(&[("api_key", &self.api_key)])
            .bearer_auth(self.server_token()?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// `POST /calls/query` — every meeting the user is a member of.
    pub async fn query_by_member(&self, user_id: &str) -> Result<Vec<MeetingRecord>, AppError> {
        let url = format!("{}/calls/query", self.base_url);
        let resp = self
            .http
            .post(&url)
            .query(&[("api_key", &self.api_key)])
            .bearer_auth(self.server_token()?)
            .json(&QueryCallsRequest { member: user_id })
            .send()
            .await?
            .error_for_status()?;
        let body: QueryCallsResponse = resp.json().await?;
        Ok(body.calls)
    }
}
