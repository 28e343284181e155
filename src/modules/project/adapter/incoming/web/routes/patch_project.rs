use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::PatchProjectError;
use crate::modules::project::domain::{Project, ProjectPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields stay untouched; `null` clears the optional URLs.
#[utoipa::path(
    patch,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = ProjectPatch,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 401, description = "Not signed in as administrator", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/projects/{project_id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .patch
        .execute(project_id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(PatchProjectError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(PatchProjectError::RepositoryError(msg)) => {
            error!("Repository error patching project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
