use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::{Project, ProjectPatch};

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(
        &self,
        project_id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, PatchProjectError> {
        if patch.name.is_null()
            || patch
                .name
                .as_value()
                .is_some_and(|name| name.trim().is_empty())
        {
            return Err(PatchProjectError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }

        self.project_repository
            .update(project_id, patch)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
            })
    }
}
