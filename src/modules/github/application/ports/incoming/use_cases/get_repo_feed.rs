use async_trait::async_trait;
use std::fmt;

use crate::modules::github::domain::FeedPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetRepoFeedError {
    Unavailable(String),
}

impl fmt::Display for GetRepoFeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetRepoFeedError::Unavailable(msg) => write!(f, "feed unavailable: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetRepoFeedUseCase: Send + Sync {
    /// Pages start at 1; anything lower is read as 1.
    async fn execute(&self, page: u32) -> Result<FeedPage, GetRepoFeedError>;
}
