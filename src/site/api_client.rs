use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::domain::AdminGrant;
use crate::modules::github::domain::FeedPage;
use crate::modules::inbox::domain::{NewContactMessage, NewJobOffer, SubmissionReceipt};
use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::modules::project::domain::{NewProject, Project, ProjectPatch};
use crate::shared::api::ApiError;
use crate::shared::store::{RecordStore, SingletonStore};
use crate::site::auth_gate::{AdminAuthBackend, AuthBackendError};
use crate::site::intake::{IntakeBackend, IntakeError};
use crate::site::repo_feed::{FeedError, FeedPageSource};
use crate::site::session::SessionContext;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "-site/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiClientError {
    fn code(&self) -> Option<&str> {
        match self {
            ApiClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ApiError>,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    email: &'a str,
    code: &'a str,
}

/// The site's view of the backend HTTP API.
///
/// Admin calls carry the bearer token held by the session, if any.
#[derive(Clone)]
pub struct PortfolioApiClient {
    http: Client,
    base_url: String,
    session: SessionContext,
}

impl PortfolioApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `Ok(None)` for 204 and for a `null` payload.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        if !status.is_success() {
            let error = serde_json::from_slice::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| ApiError {
                    code: "HTTP_ERROR".to_string(),
                    message: status.to_string(),
                });
            return Err(ApiClientError::Api {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }

        serde_json::from_slice::<Envelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    async fn expect<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiClientError> {
        self.send(request)
            .await?
            .ok_or_else(|| ApiClientError::Decode("missing data".to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Stores
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl RecordStore for PortfolioApiClient {
    type Record = Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;
    type Error = ApiClientError;

    async fn list(&self) -> Result<Vec<Project>, ApiClientError> {
        self.expect(self.http.get(self.url("/api/projects"))).await
    }

    async fn create(&self, draft: NewProject) -> Result<Project, ApiClientError> {
        let request = self.http.post(self.url("/api/projects")).json(&draft);
        self.expect(self.authorized(request)).await
    }

    async fn update(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, ApiClientError> {
        let request = self
            .http
            .patch(self.url(&format!("/api/projects/{}", id)))
            .json(&patch);
        self.expect(self.authorized(request)).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiClientError> {
        let request = self.http.delete(self.url(&format!("/api/projects/{}", id)));
        self.send::<serde_json::Value>(self.authorized(request))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl SingletonStore for PortfolioApiClient {
    type Record = ProfileRecord;
    type Patch = ProfilePatch;
    type Error = ApiClientError;

    async fn fetch(&self) -> Result<Option<ProfileRecord>, ApiClientError> {
        self.send(self.http.get(self.url("/api/profile"))).await
    }

    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileRecord, ApiClientError> {
        let request = self.http.put(self.url("/api/profile")).json(&patch);
        self.expect(self.authorized(request)).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Auth, intake, feed
// ──────────────────────────────────────────────────────────
//

fn auth_error(e: ApiClientError) -> AuthBackendError {
    match e.code() {
        Some("UNAUTHORIZED_EMAIL") => AuthBackendError::UnauthorizedEmail,
        Some("INVALID_CODE") => AuthBackendError::InvalidCode,
        _ => AuthBackendError::Unavailable(e.to_string()),
    }
}

fn intake_error(e: ApiClientError) -> IntakeError {
    match e {
        ApiClientError::Api {
            status: 400,
            message,
            ..
        } => IntakeError::Invalid(message),
        other => IntakeError::RemoteWriteFailed(other.to_string()),
    }
}

#[async_trait]
impl AdminAuthBackend for PortfolioApiClient {
    async fn sign_in_with_otp(&self, email: &str) -> Result<(), AuthBackendError> {
        let request = self
            .http
            .post(self.url("/api/auth/request-code"))
            .json(&EmailBody { email });
        self.send::<serde_json::Value>(request)
            .await
            .map(|_| ())
            .map_err(auth_error)
    }

    async fn verify_otp(&self, email: &str, code: &str) -> Result<AdminGrant, AuthBackendError> {
        let request = self
            .http
            .post(self.url("/api/auth/verify-code"))
            .json(&VerifyBody { email, code });
        self.expect(request).await.map_err(auth_error)
    }
}

#[async_trait]
impl IntakeBackend for PortfolioApiClient {
    async fn submit_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let request = self.http.post(self.url("/api/contact-messages")).json(&message);
        self.expect(request).await.map_err(intake_error)
    }

    async fn submit_job_offer(&self, offer: NewJobOffer) -> Result<SubmissionReceipt, IntakeError> {
        let request = self.http.post(self.url("/api/job-offers")).json(&offer);
        self.expect(request).await.map_err(intake_error)
    }
}

#[async_trait]
impl FeedPageSource for PortfolioApiClient {
    async fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError> {
        let request = self
            .http
            .get(self.url(&format!("/api/github/repos?page={}", page)));
        self.expect(request)
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))
    }
}
