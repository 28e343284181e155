use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::domain::AdminGrant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyAdminCodeError {
    UnauthorizedEmail,
    InvalidCode,
    ProviderUnavailable(String),
    TokenIssueFailed(String),
}

impl fmt::Display for VerifyAdminCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyAdminCodeError::UnauthorizedEmail => {
                write!(f, "email is not authorized for admin access")
            }
            VerifyAdminCodeError::InvalidCode => write!(f, "invalid or expired code"),
            VerifyAdminCodeError::ProviderUnavailable(msg) => {
                write!(f, "code provider unavailable: {}", msg)
            }
            VerifyAdminCodeError::TokenIssueFailed(msg) => {
                write!(f, "token issue failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for VerifyAdminCodeError {}

#[async_trait]
pub trait VerifyAdminCodeUseCase: Send + Sync {
    async fn execute(&self, email: &str, code: &str) -> Result<AdminGrant, VerifyAdminCodeError>;
}
