use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::use_cases::update_profile::UpdateProfileError;
use crate::modules::profile::domain::{ProfilePatch, ProfileRecord};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Creates the profile on first write. Omitted fields stay untouched.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileRecord>)),
        (status = 400, description = "Invalid profile", body = ErrorResponse),
        (status = 401, description = "Not signed in as administrator", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/profile")]
pub async fn update_profile_handler(
    admin: AdminUser,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.update.execute(req.into_inner()).await {
        Ok(record) => ApiResponse::success(record),

        Err(UpdateProfileError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!("Repository error saving profile for {}: {}", admin.email, msg);
            ApiResponse::internal_error()
        }
    }
}
