use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::modules::project::domain::{NewProject, Project, ProjectPatch};
use crate::shared::store::{PatchField, RecordStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for ProjectRepositoryPostgres {
    type Record = Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;
    type Error = ProjectRepositoryError;

    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_project).collect()
    }

    async fn create(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            technologies: Set(to_json(&data.technologies)?),
            live_url: Set(data.live_url),
            github_url: Set(data.github_url),
            image_url: Set(data.image_url),
            status: Set(data.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn update(
        &self,
        project_id: Uuid,
        data: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }

        if let PatchField::Value(tech) = data.technologies {
            model.technologies = Set(to_json(&tech)?);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        match data.live_url {
            PatchField::Unset => {}
            PatchField::Null => model.live_url = Set(None),
            PatchField::Value(url) => model.live_url = Set(Some(url)),
        }

        match data.github_url {
            PatchField::Unset => {}
            PatchField::Null => model.github_url = Set(None),
            PatchField::Value(url) => model.github_url = Set(Some(url)),
        }

        match data.image_url {
            PatchField::Unset => {}
            PatchField::Null => model.image_url = Set(None),
            PatchField::Value(url) => model.image_url = Set(Some(url)),
        }

        let has_changes = model.name.is_set()
            || model.description.is_set()
            || model.technologies.is_set()
            || model.status.is_set()
            || model.live_url.is_set()
            || model.github_url.is_set()
            || model.image_url.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_project(result);
        }

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        name: model.name,
        description: model.description,
        technologies: from_json(&model.technologies)?,
        live_url: model.live_url,
        github_url: model.github_url,
        image_url: model.image_url,
        status: model
            .status
            .parse()
            .map_err(|e: crate::modules::project::domain::UnknownProjectStatus| {
                ProjectRepositoryError::SerializationError(e.to_string())
            })?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
