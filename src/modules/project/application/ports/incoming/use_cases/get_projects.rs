use async_trait::async_trait;
use std::fmt;

use crate::modules::project::domain::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetProjectsError {
    RepositoryError(String),
}

impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Newest first.
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError>;
}
