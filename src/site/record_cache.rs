use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::shared::store::{Identified, RecordStore};
use crate::site::notifications::Notifications;
use crate::site::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("Admin access is required for this action")]
    NotAdministrator,

    #[error("Could not load data: {0}")]
    RemoteReadFailed(String),

    #[error("Could not save changes: {0}")]
    RemoteWriteFailed(String),

    /// The view went away before the response arrived. Never notified.
    #[error("view is no longer mounted")]
    Unmounted,
}

/// Mount flag, in-flight counter and error reporting shared by the caches.
pub(crate) struct CacheLifecycle {
    mounted: AtomicBool,
    in_flight: AtomicUsize,
    notifications: Notifications,
}

impl CacheLifecycle {
    pub(crate) fn new(notifications: Notifications) -> Self {
        Self {
            mounted: AtomicBool::new(true),
            in_flight: AtomicUsize::new(0),
            notifications,
        }
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub(crate) fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub(crate) fn begin_read(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn end_read(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn ensure_mounted(&self) -> Result<(), CacheError> {
        if self.is_mounted() {
            Ok(())
        } else {
            Err(CacheError::Unmounted)
        }
    }

    pub(crate) fn require_admin(&self, session: &SessionContext) -> Result<(), CacheError> {
        if session.is_administrator() {
            Ok(())
        } else {
            self.fail(CacheError::NotAdministrator)
        }
    }

    /// One notification per failure.
    pub(crate) fn fail<T>(&self, err: CacheError) -> Result<T, CacheError> {
        if err != CacheError::Unmounted {
            self.notifications.error(err.to_string());
        }
        Err(err)
    }

    pub(crate) fn notify(&self, message: &str) {
        self.notifications.info(message);
    }
}

/// Local copy of a remote collection, newest first.
///
/// Failed calls leave the cached records as they were. The lock is never held
/// across a remote call; responses are applied in the order they resolve.
pub struct RecordCache<S>
where
    S: RecordStore,
{
    store: Arc<S>,
    session: SessionContext,
    lifecycle: CacheLifecycle,
    records: Mutex<Vec<S::Record>>,
}

impl<S> RecordCache<S>
where
    S: RecordStore,
{
    pub fn new(store: Arc<S>, session: SessionContext, notifications: Notifications) -> Self {
        Self {
            store,
            session,
            lifecycle: CacheLifecycle::new(notifications),
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<S::Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<S::Record> {
        self.lock().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<S::Record> {
        self.lock().iter().find(|r| r.id() == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    /// Late responses are dropped from here on.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    pub async fn list(&self) -> Result<(), CacheError> {
        self.lifecycle.ensure_mounted()?;

        self.lifecycle.begin_read();
        let result = self.store.list().await;
        self.lifecycle.end_read();

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(records) => {
                *self.lock() = records;
                Ok(())
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteReadFailed(e.to_string())),
        }
    }

    pub async fn create(&self, draft: S::Draft) -> Result<S::Record, CacheError> {
        self.lifecycle.ensure_mounted()?;
        self.lifecycle.require_admin(&self.session)?;

        let result = self.store.create(draft).await;

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(record) => {
                self.lock().insert(0, record.clone());
                self.lifecycle.notify("Created successfully");
                Ok(record)
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteWriteFailed(e.to_string())),
        }
    }

    /// `patch` should carry only the fields that changed.
    pub async fn update(&self, id: Uuid, patch: S::Patch) -> Result<S::Record, CacheError> {
        self.lifecycle.ensure_mounted()?;
        self.lifecycle.require_admin(&self.session)?;

        let result = self.store.update(id, patch).await;

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(record) => {
                let mut records = self.lock();
                if let Some(slot) = records.iter_mut().find(|r| r.id() == id) {
                    *slot = record.clone();
                }
                drop(records);
                self.lifecycle.notify("Changes saved");
                Ok(record)
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteWriteFailed(e.to_string())),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), CacheError> {
        self.lifecycle.ensure_mounted()?;
        self.lifecycle.require_admin(&self.session)?;

        let result = self.store.delete(id).await;

        self.lifecycle.ensure_mounted()?;
        match result {
            Ok(()) => {
                self.lock().retain(|r| r.id() != id);
                self.lifecycle.notify("Deleted");
                Ok(())
            }
            Err(e) => self.lifecycle.fail(CacheError::RemoteWriteFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::domain::AdminGrant;
    use crate::modules::project::adapter::outgoing::InMemoryProjectRepository;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
    use crate::modules::project::domain::{
        split_technologies, NewProject, Project, ProjectPatch, ProjectStatus,
    };
    use crate::shared::store::PatchField;
    use crate::site::notifications::NotificationLevel;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn admin_session() -> SessionContext {
        let session = SessionContext::new();
        session.grant_admin(&AdminGrant {
            access_token: "t".to_string(),
            email: "owner@example.com".to_string(),
            expires_in: 60,
        });
        session
    }

    fn draft(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            description: "A site for my work".to_string(),
            technologies: split_technologies("React, Node.js ,  TypeScript"),
            live_url: None,
            github_url: None,
            image_url: None,
            status: ProjectStatus::InProgress,
        }
    }

    fn cache_over(
        repo: InMemoryProjectRepository,
        session: SessionContext,
    ) -> (RecordCache<InMemoryProjectRepository>, Notifications) {
        let notifications = Notifications::new();
        (
            RecordCache::new(Arc::new(repo), session, notifications.clone()),
            notifications,
        )
    }

    /// Delegates to memory until switched to failing.
    #[derive(Default)]
    struct FlakyStore {
        inner: InMemoryProjectRepository,
        failing: AtomicBool,
    }

    impl FlakyStore {
        fn failing() -> Self {
            let store = Self::default();
            store.failing.store(true, Ordering::SeqCst);
            store
        }

        fn check(&self) -> Result<(), ProjectRepositoryError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(ProjectRepositoryError::DatabaseError("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecordStore for FlakyStore {
        type Record = Project;
        type Draft = NewProject;
        type Patch = ProjectPatch;
        type Error = ProjectRepositoryError;

        async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            self.check()?;
            self.inner.list().await
        }
        async fn create(&self, draft: NewProject) -> Result<Project, ProjectRepositoryError> {
            self.check()?;
            self.inner.create(draft).await
        }
        async fn update(
            &self,
            id: Uuid,
            patch: ProjectPatch,
        ) -> Result<Project, ProjectRepositoryError> {
            self.check()?;
            self.inner.update(id, patch).await
        }
        async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
            self.check()?;
            self.inner.delete(id).await
        }
    }

    /// Holds `list` open until released.
    struct GatedStore {
        inner: InMemoryProjectRepository,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl RecordStore for GatedStore {
        type Record = Project;
        type Draft = NewProject;
        type Patch = ProjectPatch;
        type Error = ProjectRepositoryError;

        async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            self.release.notified().await;
            self.inner.list().await
        }
        async fn create(&self, draft: NewProject) -> Result<Project, ProjectRepositoryError> {
            self.inner.create(draft).await
        }
        async fn update(
            &self,
            id: Uuid,
            patch: ProjectPatch,
        ) -> Result<Project, ProjectRepositoryError> {
            self.inner.update(id, patch).await
        }
        async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_create_then_list_contains_record_once() {
        let (cache, _) = cache_over(InMemoryProjectRepository::new(), admin_session());

        let created = cache.create(draft("Portfolio")).await.unwrap();
        cache.list().await.unwrap();

        let matching: Vec<_> = cache
            .records()
            .into_iter()
            .filter(|p| p.id == created.id)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Portfolio");
        assert_eq!(matching[0].description, "A site for my work");
        assert_eq!(
            matching[0].technologies,
            vec!["React", "Node.js", "TypeScript"]
        );
    }

    #[tokio::test]
    async fn test_create_keeps_name_verbatim() {
        let (cache, _) = cache_over(InMemoryProjectRepository::new(), admin_session());

        let created = cache.create(draft("  My App ")).await.unwrap();
        cache.list().await.unwrap();

        assert_eq!(created.name, "  My App ");
        assert_eq!(cache.records()[0].name, "  My App ");
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let (cache, _) = cache_over(InMemoryProjectRepository::new(), admin_session());

        cache.create(draft("first")).await.unwrap();
        let second = cache.create(draft("second")).await.unwrap();

        assert_eq!(cache.records()[0].id, second.id);
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes_id() {
        let (cache, _) = cache_over(InMemoryProjectRepository::new(), admin_session());
        let keep = cache.create(draft("keep")).await.unwrap();
        let gone = cache.create(draft("gone")).await.unwrap();

        cache.delete(gone.id).await.unwrap();
        assert!(cache.get(gone.id).is_none());

        cache.list().await.unwrap();
        let ids: Vec<Uuid> = cache.records().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[tokio::test]
    async fn test_status_update_changes_only_status() {
        let (cache, _) = cache_over(InMemoryProjectRepository::new(), admin_session());
        let before = cache.create(draft("Portfolio")).await.unwrap();

        let after = cache
            .update(
                before.id,
                ProjectPatch {
                    status: PatchField::Value(ProjectStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.status, ProjectStatus::Completed);
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.technologies, before.technologies);
        assert_eq!(after.live_url, before.live_url);
        assert_eq!(after.github_url, before.github_url);
        assert_eq!(after.image_url, before.image_url);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(cache.get(before.id), Some(after));
    }

    #[tokio::test]
    async fn test_failed_create_leaves_cache_and_notifies_once() {
        let notifications = Notifications::new();
        let cache = RecordCache::new(
            Arc::new(FlakyStore::failing()),
            admin_session(),
            notifications.clone(),
        );
        let before = cache.records();

        let err = cache.create(draft("x")).await.unwrap_err();

        assert!(matches!(err, CacheError::RemoteWriteFailed(_)));
        assert_eq!(cache.records(), before);
        assert_eq!(notifications.snapshot().len(), 1);
        assert_eq!(notifications.snapshot()[0].level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_failed_list_keeps_stale_records() {
        let store = Arc::new(FlakyStore::default());
        let notifications = Notifications::new();
        let cache = RecordCache::new(store.clone(), admin_session(), notifications.clone());
        let cached = cache.create(draft("cached")).await.unwrap();

        store.failing.store(true, Ordering::SeqCst);

        assert!(matches!(
            cache.list().await,
            Err(CacheError::RemoteReadFailed(_))
        ));
        assert_eq!(cache.records(), vec![cached]);
        assert!(!cache.is_loading());
        assert_eq!(notifications.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_previous_record() {
        let store = Arc::new(FlakyStore::default());
        let cache = RecordCache::new(store.clone(), admin_session(), Notifications::new());
        let before = cache.create(draft("Portfolio")).await.unwrap();

        store.failing.store(true, Ordering::SeqCst);
        let result = cache
            .update(
                before.id,
                ProjectPatch {
                    name: PatchField::Value("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CacheError::RemoteWriteFailed(_))));
        assert_eq!(cache.get(before.id), Some(before));
    }

    #[tokio::test]
    async fn test_mutations_require_administrator() {
        let repo = InMemoryProjectRepository::new();
        let (cache, notifications) = cache_over(repo.clone(), SessionContext::new());

        assert_eq!(
            cache.create(draft("x")).await.unwrap_err(),
            CacheError::NotAdministrator
        );
        assert_eq!(
            cache.delete(Uuid::new_v4()).await.unwrap_err(),
            CacheError::NotAdministrator
        );
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(notifications.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_loading_flag_tracks_in_flight_read() {
        let release = Arc::new(Notify::new());
        let store = GatedStore {
            inner: InMemoryProjectRepository::new(),
            release: release.clone(),
        };
        let cache = Arc::new(RecordCache::new(
            Arc::new(store),
            admin_session(),
            Notifications::new(),
        ));

        let task = tokio::spawn({
            let cache = cache.clone();
            async move { cache.list().await }
        });

        while !cache.is_loading() {
            tokio::task::yield_now().await;
        }
        release.notify_one();
        task.await.unwrap().unwrap();

        assert!(!cache.is_loading());
    }

    #[tokio::test]
    async fn test_response_after_unmount_is_discarded() {
        let release = Arc::new(Notify::new());
        let inner = InMemoryProjectRepository::new();
        inner.create(draft("remote")).await.unwrap();

        let notifications = Notifications::new();
        let cache = Arc::new(RecordCache::new(
            Arc::new(GatedStore {
                inner,
                release: release.clone(),
            }),
            admin_session(),
            notifications.clone(),
        ));

        let task = tokio::spawn({
            let cache = cache.clone();
            async move { cache.list().await }
        });
        while !cache.is_loading() {
            tokio::task::yield_now().await;
        }

        cache.unmount();
        release.notify_one();

        assert_eq!(task.await.unwrap(), Err(CacheError::Unmounted));
        assert!(cache.records().is_empty());
        assert!(notifications.snapshot().is_empty());
    }
}
