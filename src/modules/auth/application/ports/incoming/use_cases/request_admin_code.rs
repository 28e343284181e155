use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAdminCodeError {
    UnauthorizedEmail,
    DeliveryFailed(String),
}

impl fmt::Display for RequestAdminCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestAdminCodeError::UnauthorizedEmail => {
                write!(f, "email is not authorized for admin access")
            }
            RequestAdminCodeError::DeliveryFailed(msg) => {
                write!(f, "could not deliver sign-in code: {}", msg)
            }
        }
    }
}

impl std::error::Error for RequestAdminCodeError {}

#[async_trait]
pub trait RequestAdminCodeUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), RequestAdminCodeError>;
}
