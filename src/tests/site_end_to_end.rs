//! The site state machines against a live HTTP server backed by in-memory
//! adapters.

use actix_web::{web, App, HttpServer};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::adapter::outgoing::InMemoryOtpCodeRepository;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{OtpProvider, TokenProvider};
use crate::auth::application::services::{
    EmailOtpProvider, RequestAdminCodeService, VerifyAdminCodeService,
};
use crate::auth::domain::AdminEmail;
use crate::email::adapter::outgoing::RecordingEmailSender;
use crate::email::application::services::AdminCodeEmailService;
use crate::github::application::github_use_cases::GithubUseCases;
use crate::github::application::ports::outgoing::{RepositorySource, RepositorySourceError};
use crate::github::application::service::GetRepoFeedService;
use crate::github::domain::GithubRepo;
use crate::inbox::adapter::outgoing::InMemoryInboxRepository;
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::inbox::application::service::{SubmitContactMessageService, SubmitJobOfferService};
use crate::profile::adapter::outgoing::InMemoryProfileRepository;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::use_cases::get_profile::GetProfileUseCase;
use crate::profile::application::use_cases::update_profile::UpdateProfileUseCase;
use crate::project::adapter::outgoing::InMemoryProjectRepository;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, PatchProjectService,
};
use crate::project::domain::ProjectStatus;
use crate::shared::api::custom_json_config;
use crate::shared::store::RecordStore;
use crate::site::{
    AuthGate, CacheError, ContactForm, FeedStatus, GateError, Notifications, PortfolioApiClient,
    ProfileCache, ProfileForm, ProjectForm, RecordCache, RepoFeed, SessionContext, View,
    ViewRouter,
};
use crate::tests::support::auth_helper::{jwt_service, TEST_ADMIN_EMAIL};
use crate::tests::support::project_fixtures::sample_new_project;
use crate::{init_routes, AppState};

struct FixedRepos;

#[async_trait]
impl RepositorySource for FixedRepos {
    async fn list_repos(
        &self,
        _owner: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<Vec<GithubRepo>, RepositorySourceError> {
        Ok(vec![GithubRepo {
            id: u64::from(page),
            name: format!("react-dashboard-{}", page),
            description: None,
            stargazers_count: 0,
            forks_count: 0,
            watchers_count: 0,
            language: Some("TypeScript".to_string()),
            html_url: "https://github.com/rivka2211/react-dashboard".to_string(),
            updated_at: Utc::now(),
            topics: vec![],
        }])
    }

    async fn public_repo_count(&self, _owner: &str) -> Result<u32, RepositorySourceError> {
        Ok(8)
    }
}

struct Backend {
    base_url: String,
    mail: RecordingEmailSender,
    projects: InMemoryProjectRepository,
    inbox: InMemoryInboxRepository,
    server: actix_web::dev::ServerHandle,
}

async fn start_backend() -> Backend {
    let mail = RecordingEmailSender::new();
    let projects = InMemoryProjectRepository::new();
    let profile = InMemoryProfileRepository::new();
    let inbox = InMemoryInboxRepository::new();
    let admin = AdminEmail::parse(TEST_ADMIN_EMAIL).unwrap();

    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    let otp: Arc<dyn OtpProvider + Send + Sync> = Arc::new(EmailOtpProvider::new(
        Arc::new(InMemoryOtpCodeRepository::new()),
        Arc::new(AdminCodeEmailService::new(Arc::new(mail.clone()))),
        600,
    ));

    let state = AppState {
        auth: AuthUseCases {
            request_code: Arc::new(RequestAdminCodeService::new(admin.clone(), otp.clone())),
            verify_code: Arc::new(VerifyAdminCodeService::new(admin, otp, tokens.clone())),
        },
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(projects.clone())),
            get_list: Arc::new(GetProjectsService::new(projects.clone())),
            patch: Arc::new(PatchProjectService::new(projects.clone())),
            delete: Arc::new(DeleteProjectService::new(projects.clone())),
        },
        profile: ProfileUseCases {
            get: Arc::new(GetProfileUseCase::new(profile.clone())),
            update: Arc::new(UpdateProfileUseCase::new(profile)),
        },
        inbox: InboxUseCases {
            submit_contact_message: Arc::new(SubmitContactMessageService::new(inbox.clone())),
            submit_job_offer: Arc::new(SubmitJobOfferService::new(inbox.clone())),
        },
        github: GithubUseCases {
            get_feed: Arc::new(GetRepoFeedService::new(Arc::new(FixedRepos), "rivka2211")),
        },
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let running = server.run();
    let handle = running.handle();
    actix_web::rt::spawn(running);

    Backend {
        base_url: format!("http://{}", addr),
        mail,
        projects,
        inbox,
        server: handle,
    }
}

/// The six-digit code from the last mail sent.
fn mailed_code(mail: &RecordingEmailSender) -> String {
    let last = mail.sent_emails().pop().expect("a code was mailed");
    last.body
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 6)
        .expect("six-digit code in body")
        .to_string()
}

#[actix_web::test]
async fn test_admin_flow_over_http() {
    let backend = start_backend().await;
    let session = SessionContext::new();
    let notifications = Notifications::new();
    let client = Arc::new(PortfolioApiClient::new(&backend.base_url, session.clone()).unwrap());

    let router = ViewRouter::new(session.clone());
    let gate = AuthGate::new(
        AdminEmail::parse(TEST_ADMIN_EMAIL).unwrap(),
        client.clone(),
        session.clone(),
        notifications.clone(),
    );
    let projects = RecordCache::new(client.clone(), session.clone(), notifications.clone());

    // visitor
    assert_eq!(router.request_admin(), View::Public);
    assert!(router.is_auth_prompt_open());
    assert_eq!(
        projects.create(sample_new_project()).await,
        Err(CacheError::NotAdministrator)
    );

    // other addresses never trigger a mail
    assert_eq!(
        gate.request_code("visitor@example.com").await,
        Err(GateError::UnauthorizedEmail)
    );
    assert!(backend.mail.sent_emails().is_empty());

    gate.request_code(TEST_ADMIN_EMAIL).await.unwrap();
    let code = mailed_code(&backend.mail);
    let wrong = if code == "000000" { "111111" } else { "000000" };

    assert_eq!(gate.verify_code(wrong).await, Err(GateError::InvalidCode));
    assert!(!session.is_administrator());
    assert_eq!(router.current_view(), View::Public);

    gate.verify_code(&code).await.unwrap();
    assert!(session.is_administrator());
    assert_eq!(router.current_view(), View::Admin);

    // projects
    let form = ProjectForm {
        name: "Portfolio".to_string(),
        description: "My site".to_string(),
        technologies: "React, Node.js ,  TypeScript".to_string(),
        ..Default::default()
    };
    let created = projects.create(form.to_new_project().unwrap()).await.unwrap();
    projects.list().await.unwrap();
    assert_eq!(projects.records(), vec![created.clone()]);
    assert_eq!(created.technologies, vec!["React", "Node.js", "TypeScript"]);

    let mut edit = ProjectForm::from_project(&created);
    edit.status = ProjectStatus::Completed;
    let updated = projects
        .update(created.id, edit.to_patch(&created).unwrap())
        .await
        .unwrap();
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.technologies, created.technologies);

    projects.delete(created.id).await.unwrap();
    projects.list().await.unwrap();
    assert!(projects.records().is_empty());
    assert!(backend.projects.list().await.unwrap().is_empty());

    // profile
    let profile = ProfileCache::new(client.clone(), session.clone(), notifications.clone());
    profile.load().await.unwrap();
    let mut profile_form = ProfileForm::from_record(profile.record().as_ref());
    profile_form.location = "Jerusalem".to_string();
    profile
        .save(profile_form.to_patch(profile.record().as_ref()))
        .await
        .unwrap();
    assert_eq!(profile.profile().location, "Jerusalem");
    assert_eq!(profile.profile().name, "Rivka");

    // sign out
    gate.sign_out();
    assert!(!session.is_administrator());
    assert_eq!(router.current_view(), View::Public);
    // not-admin create, foreign address, wrong code
    assert_eq!(notifications.errors().len(), 3);

    backend.server.stop(true).await;
}

#[actix_web::test]
async fn test_public_visitor_flow_over_http() {
    let backend = start_backend().await;
    let session = SessionContext::new();
    let notifications = Notifications::new();
    let client = Arc::new(PortfolioApiClient::new(&backend.base_url, session.clone()).unwrap());

    // contact form
    let contact = ContactForm::new(client.clone(), notifications.clone());
    contact.edit(|d| {
        d.name = "Dana".to_string();
        d.email = "dana@example.com".to_string();
        d.message = "Let's work together".to_string();
    });
    contact.submit().await.unwrap();
    assert_eq!(backend.inbox.contact_messages().len(), 1);
    assert!(contact.draft().name.is_empty());

    // feed: 8 public repos => 2 pages
    let feed = RepoFeed::new(client.clone(), notifications.clone());
    feed.load().await.unwrap();
    assert_eq!(feed.total_pages(), 2);
    feed.next_page().await.unwrap();
    match feed.status() {
        FeedStatus::Ready(page) => {
            assert_eq!(page.page, 2);
            assert_eq!(page.repos[0].repo.name, "react-dashboard-2");
            assert!(!page.repos[0].summary.is_empty());
        }
        other => panic!("unexpected feed status: {:?}", other),
    }

    // profile defaults before anything was saved
    let profile = ProfileCache::new(client, session, notifications.clone());
    profile.load().await.unwrap();
    assert!(profile.record().is_none());
    assert_eq!(profile.profile().title, "Full Stack Developer");

    assert!(notifications.errors().is_empty());
    backend.server.stop(true).await;
}
