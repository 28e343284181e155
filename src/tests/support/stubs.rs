use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    RequestAdminCodeError, RequestAdminCodeUseCase, VerifyAdminCodeError, VerifyAdminCodeUseCase,
};
use crate::auth::domain::AdminGrant;
use crate::github::application::github_use_cases::GithubUseCases;
use crate::github::application::ports::incoming::use_cases::{
    GetRepoFeedError, GetRepoFeedUseCase,
};
use crate::github::domain::FeedPage;
use crate::inbox::application::ports::incoming::use_cases::{
    SubmitContactMessageError, SubmitContactMessageUseCase, SubmitJobOfferError,
    SubmitJobOfferUseCase,
};
use crate::inbox::domain::{NewContactMessage, NewJobOffer, SubmissionReceipt};
use crate::profile::application::use_cases::get_profile::{GetProfileError, IGetProfileUseCase};
use crate::profile::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};
use crate::profile::domain::{ProfilePatch, ProfileRecord};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, PatchProjectError, PatchProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::project::domain::{NewProject, Project, ProjectPatch};
use crate::shared::store::RecordStore;

// ─── Auth ────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubRequestAdminCodeUseCase {
    result: Result<(), RequestAdminCodeError>,
}

impl StubRequestAdminCodeUseCase {
    pub fn returning(result: Result<(), RequestAdminCodeError>) -> Self {
        Self { result }
    }
}

impl Default for StubRequestAdminCodeUseCase {
    fn default() -> Self {
        Self::returning(Ok(()))
    }
}

#[async_trait]
impl RequestAdminCodeUseCase for StubRequestAdminCodeUseCase {
    async fn execute(&self, _email: &str) -> Result<(), RequestAdminCodeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubVerifyAdminCodeUseCase {
    result: Result<AdminGrant, VerifyAdminCodeError>,
}

impl StubVerifyAdminCodeUseCase {
    pub fn returning(result: Result<AdminGrant, VerifyAdminCodeError>) -> Self {
        Self { result }
    }
}

impl Default for StubVerifyAdminCodeUseCase {
    fn default() -> Self {
        Self::returning(Err(VerifyAdminCodeError::InvalidCode))
    }
}

#[async_trait]
impl VerifyAdminCodeUseCase for StubVerifyAdminCodeUseCase {
    async fn execute(&self, _email: &str, _code: &str) -> Result<AdminGrant, VerifyAdminCodeError> {
        self.result.clone()
    }
}

pub fn default_auth_use_cases() -> AuthUseCases {
    AuthUseCases {
        request_code: Arc::new(StubRequestAdminCodeUseCase::default()),
        verify_code: Arc::new(StubVerifyAdminCodeUseCase::default()),
    }
}

// ─── Projects ────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: NewProject) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for StubPatchProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _patch: ProjectPatch,
    ) -> Result<Project, PatchProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

/// Repository whose `create` and `list` answers are fixed up front. Counts
/// every call.
#[derive(Clone)]
pub struct ScriptedProjectRepo {
    create_result: Arc<Mutex<Option<Result<Project, ProjectRepositoryError>>>>,
    list_result: Arc<Mutex<Option<Result<Vec<Project>, ProjectRepositoryError>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProjectRepo {
    fn empty() -> Self {
        Self {
            create_result: Arc::new(Mutex::new(None)),
            list_result: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn create_returns(result: Result<Project, ProjectRepositoryError>) -> Self {
        let repo = Self::empty();
        *repo.create_result.lock().unwrap() = Some(result);
        repo
    }

    pub fn list_returns(result: Result<Vec<Project>, ProjectRepositoryError>) -> Self {
        let repo = Self::empty();
        *repo.list_result.lock().unwrap() = Some(result);
        repo
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for ScriptedProjectRepo {
    type Record = Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;
    type Error = ProjectRepositoryError;

    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.list_result
            .lock()
            .unwrap()
            .clone()
            .expect("list was not scripted")
    }

    async fn create(&self, _draft: NewProject) -> Result<Project, ProjectRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.create_result
            .lock()
            .unwrap()
            .clone()
            .expect("create was not scripted")
    }

    async fn update(
        &self,
        _id: Uuid,
        _patch: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        unimplemented!("Not used in this test")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
        unimplemented!("Not used in this test")
    }
}

// ─── Profile ─────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl IGetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<Option<ProfileRecord>, GetProfileError> {
        Ok(None)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _patch: ProfilePatch) -> Result<ProfileRecord, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

// ─── Intake ──────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubSubmitContactMessageUseCase;

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        _message: NewContactMessage,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitJobOfferUseCase;

#[async_trait]
impl SubmitJobOfferUseCase for StubSubmitJobOfferUseCase {
    async fn execute(&self, _offer: NewJobOffer) -> Result<SubmissionReceipt, SubmitJobOfferError> {
        unimplemented!("Not used in this test")
    }
}

// ─── GitHub ──────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubGetRepoFeedUseCase;

#[async_trait]
impl GetRepoFeedUseCase for StubGetRepoFeedUseCase {
    async fn execute(&self, _page: u32) -> Result<FeedPage, GetRepoFeedError> {
        Err(GetRepoFeedError::Unavailable("not configured".to_string()))
    }
}

pub fn default_github_use_cases() -> GithubUseCases {
    GithubUseCases {
        get_feed: Arc::new(StubGetRepoFeedUseCase),
    }
}
