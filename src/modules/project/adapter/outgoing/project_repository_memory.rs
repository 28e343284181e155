use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::modules::project::domain::{NewProject, Project, ProjectPatch};
use crate::shared::store::RecordStore;

/// Process-local project store. Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    records: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Project>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Project>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordStore for InMemoryProjectRepository {
    type Record = Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;
    type Error = ProjectRepositoryError;

    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut projects = self.lock().clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn create(&self, draft: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            live_url: draft.live_url,
            github_url: draft.github_url,
            image_url: draft.image_url,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        self.lock().push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut records = self.lock();
        let project = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if !patch.is_empty() {
            patch.apply(project);
            project.updated_at = Utc::now();
        }
        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
