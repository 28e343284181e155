use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::domain::ProfileRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public. `data` is `null` until the profile has been saved once.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Stored profile; data is null until the first save", body = inline(SuccessResponse<ProfileRecord>)),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to load profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
