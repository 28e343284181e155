use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    RequestAdminCodeUseCase, VerifyAdminCodeUseCase,
};
use crate::github::application::github_use_cases::GithubUseCases;
use crate::github::application::ports::incoming::use_cases::GetRepoFeedUseCase;
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::inbox::application::ports::incoming::use_cases::{
    SubmitContactMessageUseCase, SubmitJobOfferUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::use_cases::get_profile::IGetProfileUseCase;
use crate::profile::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, PatchProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    project: ProjectUseCases,
    profile: ProfileUseCases,
    inbox: InboxUseCases,
    github: GithubUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: default_auth_use_cases(),
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                patch: Arc::new(StubPatchProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                update: Arc::new(StubUpdateProfileUseCase),
            },
            inbox: InboxUseCases {
                submit_contact_message: Arc::new(StubSubmitContactMessageUseCase),
                submit_job_offer: Arc::new(StubSubmitJobOfferUseCase),
            },
            github: default_github_use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_request_admin_code(
        mut self,
        uc: impl RequestAdminCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.request_code = Arc::new(uc);
        self
    }

    pub fn with_verify_admin_code(
        mut self,
        uc: impl VerifyAdminCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.verify_code = Arc::new(uc);
        self
    }

    // Projects
    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_patch_project(
        mut self,
        uc: impl PatchProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Profile
    pub fn with_get_profile(mut self, uc: impl IGetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    // Intake
    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.inbox.submit_contact_message = Arc::new(uc);
        self
    }

    pub fn with_submit_job_offer(
        mut self,
        uc: impl SubmitJobOfferUseCase + Send + Sync + 'static,
    ) -> Self {
        self.inbox.submit_job_offer = Arc::new(uc);
        self
    }

    // GitHub
    pub fn with_get_repo_feed(mut self, uc: impl GetRepoFeedUseCase + Send + Sync + 'static) -> Self {
        self.github.get_feed = Arc::new(uc);
        self
    }

    pub fn build_state(self) -> AppState {
        AppState {
            auth: self.auth,
            project: self.project,
            profile: self.profile,
            inbox: self.inbox,
            github: self.github,
        }
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.build_state())
    }
}
