use async_trait::async_trait;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RequestAdminCodeError, VerifyAdminCodeError,
};
use crate::modules::auth::domain::AdminGrant;
use crate::modules::github::application::github_use_cases::GithubUseCases;
use crate::modules::github::domain::FeedPage;
use crate::modules::inbox::application::inbox_use_cases::InboxUseCases;
use crate::modules::inbox::application::ports::incoming::use_cases::{
    SubmitContactMessageError, SubmitJobOfferError,
};
use crate::modules::inbox::domain::{NewContactMessage, NewJobOffer, SubmissionReceipt};
use crate::site::auth_gate::{AdminAuthBackend, AuthBackendError};
use crate::site::intake::{IntakeBackend, IntakeError};
use crate::site::repo_feed::{FeedError, FeedPageSource};
use crate::AppState;

/// Drives the site straight from the backend use cases, with no HTTP hop.
/// Project and profile caches take the repositories directly.
#[derive(Clone)]
pub struct LocalBackend {
    auth: AuthUseCases,
    inbox: InboxUseCases,
    github: GithubUseCases,
}

impl LocalBackend {
    pub fn new(auth: AuthUseCases, inbox: InboxUseCases, github: GithubUseCases) -> Self {
        Self {
            auth,
            inbox,
            github,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.auth.clone(),
            state.inbox.clone(),
            state.github.clone(),
        )
    }
}

#[async_trait]
impl AdminAuthBackend for LocalBackend {
    async fn sign_in_with_otp(&self, email: &str) -> Result<(), AuthBackendError> {
        self.auth
            .request_code
            .execute(email)
            .await
            .map_err(|e| match e {
                RequestAdminCodeError::UnauthorizedEmail => AuthBackendError::UnauthorizedEmail,
                RequestAdminCodeError::DeliveryFailed(msg) => AuthBackendError::Unavailable(msg),
            })
    }

    async fn verify_otp(&self, email: &str, code: &str) -> Result<AdminGrant, AuthBackendError> {
        self.auth
            .verify_code
            .execute(email, code)
            .await
            .map_err(|e| match e {
                VerifyAdminCodeError::UnauthorizedEmail => AuthBackendError::UnauthorizedEmail,
                VerifyAdminCodeError::InvalidCode => AuthBackendError::InvalidCode,
                VerifyAdminCodeError::ProviderUnavailable(msg)
                | VerifyAdminCodeError::TokenIssueFailed(msg) => {
                    AuthBackendError::Unavailable(msg)
                }
            })
    }
}

#[async_trait]
impl IntakeBackend for LocalBackend {
    async fn submit_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<SubmissionReceipt, IntakeError> {
        self.inbox
            .submit_contact_message
            .execute(message)
            .await
            .map_err(|e| match e {
                SubmitContactMessageError::InvalidInput(msg) => IntakeError::Invalid(msg),
                SubmitContactMessageError::RepositoryError(msg) => {
                    IntakeError::RemoteWriteFailed(msg)
                }
            })
    }

    async fn submit_job_offer(&self, offer: NewJobOffer) -> Result<SubmissionReceipt, IntakeError> {
        self.inbox
            .submit_job_offer
            .execute(offer)
            .await
            .map_err(|e| match e {
                SubmitJobOfferError::InvalidInput(msg) => IntakeError::Invalid(msg),
                SubmitJobOfferError::RepositoryError(msg) => IntakeError::RemoteWriteFailed(msg),
            })
    }
}

#[async_trait]
impl FeedPageSource for LocalBackend {
    async fn fetch_page(&self, page: u32) -> Result<FeedPage, FeedError> {
        self.github
            .get_feed
            .execute(page)
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))
    }
}
