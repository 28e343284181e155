use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifyAdminCodeError, VerifyAdminCodeUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    OtpProvider, OtpProviderError, TokenProvider,
};
use crate::modules::auth::domain::{AdminEmail, AdminGrant};

pub struct VerifyAdminCodeService {
    admin_email: AdminEmail,
    provider: Arc<dyn OtpProvider + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl VerifyAdminCodeService {
    pub fn new(
        admin_email: AdminEmail,
        provider: Arc<dyn OtpProvider + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            admin_email,
            provider,
            tokens,
        }
    }
}

#[async_trait]
impl VerifyAdminCodeUseCase for VerifyAdminCodeService {
    async fn execute(&self, email: &str, code: &str) -> Result<AdminGrant, VerifyAdminCodeError> {
        if !self.admin_email.matches(email) {
            return Err(VerifyAdminCodeError::UnauthorizedEmail);
        }

        let admin = self.admin_email.as_str();

        self.provider
            .verify_otp(admin, code)
            .await
            .map_err(|e| match e {
                OtpProviderError::InvalidCode => {
                    warn!("Admin code verification failed");
                    VerifyAdminCodeError::InvalidCode
                }
                OtpProviderError::StorageError(msg) | OtpProviderError::DeliveryFailed(msg) => {
                    VerifyAdminCodeError::ProviderUnavailable(msg)
                }
            })?;

        let access_token = self.tokens.issue_admin_token(admin).map_err(|e| {
            error!(error = %e, "Failed to issue admin token");
            VerifyAdminCodeError::TokenIssueFailed(e.to_string())
        })?;

        info!("Admin session granted");

        Ok(AdminGrant {
            access_token,
            email: admin.to_string(),
            expires_in: self.tokens.access_token_ttl(),
        })
    }
}
