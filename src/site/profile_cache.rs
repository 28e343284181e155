use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::profile::domain::{Profile, ProfilePatch, ProfileRecord};
use crate::shared::store::SingletonStore;
use crate::site::notifications::Notifications;
use crate::site::record_cache::{CacheError, CacheLifecycle};
use crate::site::session::SessionContext;

/// Local copy of the profile singleton.
///
/// Until the first successful load (or when nothing is stored yet) the
/// resolved profile is the built-in default.
pub struct ProfileCache<S>
where
    S: SingletonStore<Record = ProfileRecord, Patch = ProfilePatch>,
{
    store: Arc<S>,
    session: SessionContext,
    lifecycle: CacheLifecycle,
    record: Mutex<Option<ProfileRecord>>,
}

impl<S> ProfileCache<S>
where
    S: SingletonStore<Record = ProfileRecord, Patch = ProfilePatch>,
{
    pub fn new(store: Arc<S>, session: SessionContext, notifications: Notifications) -> Self {
        Self {
            store,
            session,
            lifecycle: CacheLifecycle::new(notifications),
            record: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ProfileRecord>> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self) -> Option<ProfileRecord> {
        self.lock().clone()
    }

    pub fn profile(&self) -> Profile {
        Profile::resolve(self.lock().as_ref())
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    pub async fn load(&self) -> Result<(), CacheError> {
        self.lifecycle.ensure_mounted()?;

        self.lifecycle.begin_read();
        let result = self.store.fetch().await;
        self.lifecycle.end_read();

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(record) => {
                *self.lock() = record;
                Ok(())
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteReadFailed(e.to_string())),
        }
    }

    pub async fn save(&self, patch: ProfilePatch) -> Result<Profile, CacheError> {
        self.lifecycle.ensure_mounted()?;
        self.lifecycle.require_admin(&self.session)?;

        let result = self.store.upsert(patch).await;

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(record) => {
                let profile = Profile::resolve(Some(&record));
                *self.lock() = Some(record);
                self.lifecycle.notify("Profile saved");
                Ok(profile)
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteWriteFailed(e.to_string())),
        }
    }
}
