use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::NotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
}
