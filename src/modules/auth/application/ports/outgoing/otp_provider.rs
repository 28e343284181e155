use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpProviderError {
    #[error("Invalid or expired code")]
    InvalidCode,

    #[error("Code delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Code storage failed: {0}")]
    StorageError(String),
}

/// Passwordless sign-in boundary: send a code, then check it.
#[async_trait]
pub trait OtpProvider: Send + Sync {
    async fn sign_in_with_otp(&self, email: &str) -> Result<(), OtpProviderError>;

    /// Succeeds at most once per issued code.
    async fn verify_otp(&self, email: &str, code: &str) -> Result<(), OtpProviderError>;
}
