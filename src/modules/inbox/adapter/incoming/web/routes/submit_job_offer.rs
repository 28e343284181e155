use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::inbox::application::ports::incoming::use_cases::SubmitJobOfferError;
use crate::modules::inbox::domain::{NewJobOffer, SubmissionReceipt};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/job-offers",
    tag = "intake",
    request_body = NewJobOffer,
    responses(
        (status = 201, description = "Offer stored", body = inline(SuccessResponse<SubmissionReceipt>)),
        (status = 400, description = "Missing field or bad email", body = ErrorResponse),
    )
)]
#[post("/api/job-offers")]
pub async fn submit_job_offer_handler(
    req: web::Json<NewJobOffer>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inbox.submit_job_offer.execute(req.into_inner()).await {
        Ok(receipt) => ApiResponse::created(receipt),

        Err(SubmitJobOfferError::InvalidInput(msg)) => {
            warn!("Rejected job offer: {}", msg);
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SubmitJobOfferError::RepositoryError(msg)) => {
            error!("Failed to store job offer: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
