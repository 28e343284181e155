use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::modules::project::domain::Project;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.project_repository
            .list()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))
    }
}
