use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::domain::{Project, ProjectPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchProjectError {
    NotFound,
    InvalidInput(String),
    RepositoryError(String),
}

impl fmt::Display for PatchProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchProjectError::NotFound => write!(f, "project not found"),
            PatchProjectError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            PatchProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, PatchProjectError>;
}
