use async_trait::async_trait;

use crate::modules::github::domain::GithubRepo;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositorySourceError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Read-only listing of an account's public repositories.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Most recently updated first.
    async fn list_repos(
        &self,
        owner: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubRepo>, RepositorySourceError>;

    async fn public_repo_count(&self, owner: &str) -> Result<u32, RepositorySourceError>;
}
