use async_trait::async_trait;
use std::fmt;

use crate::modules::inbox::domain::{NewContactMessage, SubmissionReceipt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitContactMessageError {
    InvalidInput(String),
    RepositoryError(String),
}

impl fmt::Display for SubmitContactMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitContactMessageError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SubmitContactMessageError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        message: NewContactMessage,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError>;
}
