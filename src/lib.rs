pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub mod site;

pub use modules::auth;
pub use modules::email;
pub use modules::github;
pub use modules::inbox;
pub use modules::profile;
pub use modules::project;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::github::application::github_use_cases::GithubUseCases;
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub profile: ProfileUseCases,
    pub inbox: InboxUseCases,
    pub github: GithubUseCases,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::request_code_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_code_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    // Intake
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_contact_message_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_job_offer_handler);
    // GitHub feed
    cfg.service(crate::github::adapter::incoming::web::routes::get_repos_handler);
}
