use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::{NewProject, Project};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, data: NewProject) -> Result<Project, CreateProjectError> {
        if data.name.trim().is_empty() {
            return Err(CreateProjectError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }

        self.project_repository
            .create(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })
    }
}
