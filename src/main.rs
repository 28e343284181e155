use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_actix::api::ApiDoc;
use portfolio_actix::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use portfolio_actix::auth::adapter::outgoing::RedisOtpCodeRepository;
use portfolio_actix::auth::application::auth_use_cases::AuthUseCases;
use portfolio_actix::auth::application::ports::outgoing::{OtpProvider, TokenProvider};
use portfolio_actix::auth::application::services::{
    EmailOtpProvider, RequestAdminCodeService, VerifyAdminCodeService,
};
use portfolio_actix::config::{AppConfig, SmtpConfig};
use portfolio_actix::email::adapter::outgoing::SmtpEmailSender;
use portfolio_actix::email::application::services::AdminCodeEmailService;
use portfolio_actix::github::adapter::outgoing::GithubApiClient;
use portfolio_actix::github::application::github_use_cases::GithubUseCases;
use portfolio_actix::github::application::service::GetRepoFeedService;
use portfolio_actix::inbox::adapter::outgoing::InboxRepositoryPostgres;
use portfolio_actix::inbox::application::inbox_use_cases::InboxUseCases;
use portfolio_actix::inbox::application::service::{
    SubmitContactMessageService, SubmitJobOfferService,
};
use portfolio_actix::profile::adapter::outgoing::ProfileRepositoryPostgres;
use portfolio_actix::profile::application::profile_use_cases::ProfileUseCases;
use portfolio_actix::profile::application::use_cases::get_profile::GetProfileUseCase;
use portfolio_actix::profile::application::use_cases::update_profile::UpdateProfileUseCase;
use portfolio_actix::project::adapter::outgoing::ProjectRepositoryPostgres;
use portfolio_actix::project::application::project_use_cases::ProjectUseCases;
use portfolio_actix::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, PatchProjectService,
};
use portfolio_actix::shared::api::custom_json_config;
use portfolio_actix::{init_routes, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    // Redis connection
    let redis_arc = Arc::new(
        Config::from_url(&config.redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis pool")?,
    );

    // SMTP
    let smtp_sender = match &config.smtp {
        SmtpConfig::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)
            .context("Failed to configure SMTP relay")?,
    };

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::new(
        config.jwt_secret.clone(),
        config.jwt_access_expiry,
    ));
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let otp_provider: Arc<dyn OtpProvider + Send + Sync> = Arc::new(EmailOtpProvider::new(
        Arc::new(RedisOtpCodeRepository::new(Arc::clone(&redis_arc))),
        Arc::new(AdminCodeEmailService::new(Arc::new(smtp_sender))),
        config.otp_ttl_seconds,
    ));

    let auth = AuthUseCases {
        request_code: Arc::new(RequestAdminCodeService::new(
            config.admin_email.clone(),
            Arc::clone(&otp_provider),
        )),
        verify_code: Arc::new(VerifyAdminCodeService::new(
            config.admin_email.clone(),
            otp_provider,
            Arc::clone(&token_provider_arc),
        )),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
        patch: Arc::new(PatchProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileUseCase::new(profile_repo.clone())),
        update: Arc::new(UpdateProfileUseCase::new(profile_repo)),
    };

    // Intake
    let inbox_repo = InboxRepositoryPostgres::new(Arc::clone(&db_arc));
    let inbox = InboxUseCases {
        submit_contact_message: Arc::new(SubmitContactMessageService::new(inbox_repo.clone())),
        submit_job_offer: Arc::new(SubmitJobOfferService::new(inbox_repo)),
    };

    // GitHub feed
    let github_client =
        GithubApiClient::new(config.github_api_url.clone()).context("Failed to build GitHub client")?;
    let github = GithubUseCases {
        get_feed: Arc::new(GetRepoFeedService::new(
            Arc::new(github_client),
            config.github_owner.clone(),
        )),
    };

    let state = AppState {
        auth,
        project,
        profile,
        inbox,
        github,
    };

    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!(%server_url, "Server listening");
    info!("API docs at http://{}/swagger-ui/", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
