use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::email::application::ports::outgoing::AdminCodeNotifier;
use crate::modules::auth::application::ports::outgoing::{
    OtpCodeRepository, OtpProvider, OtpProviderError,
};
use crate::modules::auth::domain::{hash_code, OtpCode};

/// Mails a fresh six-digit code and checks it against the stored digest.
#[derive(Clone)]
pub struct EmailOtpProvider {
    codes: Arc<dyn OtpCodeRepository + Send + Sync>,
    notifier: Arc<dyn AdminCodeNotifier + Send + Sync>,
    ttl_seconds: u64,
}

impl EmailOtpProvider {
    pub fn new(
        codes: Arc<dyn OtpCodeRepository + Send + Sync>,
        notifier: Arc<dyn AdminCodeNotifier + Send + Sync>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            codes,
            notifier,
            ttl_seconds,
        }
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[async_trait]
impl OtpProvider for EmailOtpProvider {
    async fn sign_in_with_otp(&self, email: &str) -> Result<(), OtpProviderError> {
        let key = Self::key(email);
        let code = OtpCode::generate();

        self.codes
            .save_code(&key, &code.hash(), self.ttl_seconds)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store sign-in code");
                OtpProviderError::StorageError(e.to_string())
            })?;

        if let Err(e) = self
            .notifier
            .send_admin_code(&key, code.as_str(), self.ttl_seconds)
            .await
        {
            // an undeliverable code must not stay redeemable
            if let Err(cleanup) = self.codes.consume_code(&key).await {
                warn!(error = %cleanup, "Failed to discard undelivered sign-in code");
            }
            return Err(OtpProviderError::DeliveryFailed(e.to_string()));
        }

        info!("Sign-in code issued");
        Ok(())
    }

    async fn verify_otp(&self, email: &str, code: &str) -> Result<(), OtpProviderError> {
        let key = Self::key(email);

        let stored = self
            .codes
            .find_code(&key)
            .await
            .map_err(|e| OtpProviderError::StorageError(e.to_string()))?
            .ok_or(OtpProviderError::InvalidCode)?;

        if hash_code(code) != stored {
            return Err(OtpProviderError::InvalidCode);
        }

        let consumed = self
            .codes
            .consume_code(&key)
            .await
            .map_err(|e| OtpProviderError::StorageError(e.to_string()))?;

        // lost a race with another verification of the same code
        if !consumed {
            return Err(OtpProviderError::InvalidCode);
        }

        Ok(())
    }
}
