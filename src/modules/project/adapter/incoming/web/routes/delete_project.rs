use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not signed in as administrator", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, "Project deleted");
            ApiResponse::no_content()
        }

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Failed to delete project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
