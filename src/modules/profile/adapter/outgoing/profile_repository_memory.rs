use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;
use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::shared::store::SingletonStore;

/// Process-local profile slot. Clones share the same record.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    record: Arc<Mutex<Option<ProfileRecord>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(record))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ProfileRecord>> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SingletonStore for InMemoryProfileRepository {
    type Record = ProfileRecord;
    type Patch = ProfilePatch;
    type Error = ProfileRepositoryError;

    async fn fetch(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        Ok(self.lock().clone())
    }

    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut slot = self.lock();
        let now = Utc::now();

        let record = slot.get_or_insert_with(|| ProfileRecord {
            id: Uuid::new_v4(),
            name: None,
            title: None,
            bio: None,
            email: None,
            phone: None,
            location: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        });

        if !patch.is_empty() {
            patch.apply(record);
            record.updated_at = now;
        }

        Ok(record.clone())
    }
}
