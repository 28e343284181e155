use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::auth::application::ports::incoming::use_cases::{
    RequestAdminCodeError, RequestAdminCodeUseCase,
};
use crate::modules::auth::application::ports::outgoing::{OtpProvider, OtpProviderError};
use crate::modules::auth::domain::AdminEmail;

pub struct RequestAdminCodeService {
    admin_email: AdminEmail,
    provider: Arc<dyn OtpProvider + Send + Sync>,
}

impl RequestAdminCodeService {
    pub fn new(admin_email: AdminEmail, provider: Arc<dyn OtpProvider + Send + Sync>) -> Self {
        Self {
            admin_email,
            provider,
        }
    }
}

#[async_trait]
impl RequestAdminCodeUseCase for RequestAdminCodeService {
    async fn execute(&self, email: &str) -> Result<(), RequestAdminCodeError> {
        // nothing is stored or sent for other addresses
        if !self.admin_email.matches(email) {
            warn!("Admin code requested for an unauthorized address");
            return Err(RequestAdminCodeError::UnauthorizedEmail);
        }

        self.provider
            .sign_in_with_otp(self.admin_email.as_str())
            .await
            .map_err(|e| match e {
                OtpProviderError::DeliveryFailed(msg) | OtpProviderError::StorageError(msg) => {
                    RequestAdminCodeError::DeliveryFailed(msg)
                }
                OtpProviderError::InvalidCode => RequestAdminCodeError::DeliveryFailed(
                    "unexpected provider response".to_string(),
                ),
            })
    }
}
