use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{CodeSent, RequestCodeRequest, VerifyCodeRequest};
use crate::auth::domain::{AdminGrant, AdminIdentity};
use crate::github::domain::{DescribedRepo, FeedPage, GithubRepo};
use crate::inbox::domain::{NewContactMessage, NewJobOffer, SubmissionReceipt};
use crate::profile::domain::{ProfilePatch, ProfileRecord};
use crate::project::domain::{NewProject, Project, ProjectPatch, ProjectStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content plus the owner's admin endpoints"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::request_code_handler,
        crate::auth::adapter::incoming::web::routes::verify_code_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::patch_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Profile
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_profile_handler,

        // Intake
        crate::inbox::adapter::incoming::web::routes::submit_contact_message_handler,
        crate::inbox::adapter::incoming::web::routes::submit_job_offer_handler,

        // GitHub feed
        crate::github::adapter::incoming::web::routes::get_repos_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RequestCodeRequest,
            CodeSent,
            VerifyCodeRequest,
            AdminGrant,
            AdminIdentity,
            Project,
            NewProject,
            ProjectPatch,
            ProjectStatus,
            ProfileRecord,
            ProfilePatch,
            NewContactMessage,
            NewJobOffer,
            SubmissionReceipt,
            GithubRepo,
            DescribedRepo,
            FeedPage
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in with an emailed code"),
        (name = "projects", description = "Portfolio projects"),
        (name = "profile", description = "Owner profile"),
        (name = "intake", description = "Contact messages and job offers"),
        (name = "github", description = "Public repository feed"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/verify-code"))
                        .build(),
                ),
            )
        }
    }
}
