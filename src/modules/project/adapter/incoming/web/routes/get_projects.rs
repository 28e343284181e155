use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing, newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, newest first", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::RepositoryError(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
