use async_trait::async_trait;
use std::fmt;

use crate::modules::inbox::domain::{NewJobOffer, SubmissionReceipt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitJobOfferError {
    InvalidInput(String),
    RepositoryError(String),
}

impl fmt::Display for SubmitJobOfferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitJobOfferError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SubmitJobOfferError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SubmitJobOfferUseCase: Send + Sync {
    async fn execute(&self, offer: NewJobOffer) -> Result<SubmissionReceipt, SubmitJobOfferError>;
}
