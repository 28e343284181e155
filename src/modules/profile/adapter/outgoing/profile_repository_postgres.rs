use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    self as profiles, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;
use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::shared::store::{PatchField, SingletonStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// The oldest row is the active profile if more than one ever got written.
    async fn current(&self) -> Result<Option<profiles::Model>, ProfileRepositoryError> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl SingletonStore for ProfileRepositoryPostgres {
    type Record = ProfileRecord;
    type Patch = ProfilePatch;
    type Error = ProfileRepositoryError;

    async fn fetch(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        Ok(self.current().await?.map(model_to_record))
    }

    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileRecord, ProfileRepositoryError> {
        let Some(existing) = self.current().await? else {
            let now = Utc::now().fixed_offset();
            let mut model = ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(None),
                title: Set(None),
                bio: Set(None),
                email: Set(None),
                phone: Set(None),
                location: Set(None),
                avatar_url: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            };
            apply_patch(&mut model, patch);

            let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
            return Ok(model_to_record(inserted));
        };

        if patch.is_empty() {
            return Ok(model_to_record(existing));
        }

        let mut model = existing.into_active_model();
        apply_patch(&mut model, patch);

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_record(updated))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_patch(model: &mut ActiveModel, patch: ProfilePatch) {
    fn set(slot: &mut sea_orm::ActiveValue<Option<String>>, field: PatchField<String>) {
        match field {
            PatchField::Unset => {}
            PatchField::Null => *slot = Set(None),
            PatchField::Value(v) => *slot = Set(Some(v)),
        }
    }

    set(&mut model.name, patch.name);
    set(&mut model.title, patch.title);
    set(&mut model.bio, patch.bio);
    set(&mut model.email, patch.email);
    set(&mut model.phone, patch.phone);
    set(&mut model.location, patch.location);
    set(&mut model.avatar_url, patch.avatar_url);
}

fn model_to_record(model: profiles::Model) -> ProfileRecord {
    ProfileRecord {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        avatar_url: model.avatar_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
