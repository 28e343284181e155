use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::inbox::application::ports::incoming::use_cases::SubmitContactMessageError;
use crate::modules::inbox::domain::{NewContactMessage, SubmissionReceipt};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public. Responds with `{id, created_at}` only.
#[utoipa::path(
    post,
    path = "/api/contact-messages",
    tag = "intake",
    request_body = NewContactMessage,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<SubmissionReceipt>)),
        (status = 400, description = "Missing field or bad email", body = ErrorResponse),
    )
)]
#[post("/api/contact-messages")]
pub async fn submit_contact_message_handler(
    req: web::Json<NewContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .inbox
        .submit_contact_message
        .execute(req.into_inner())
        .await
    {
        Ok(receipt) => ApiResponse::created(receipt),

        Err(SubmitContactMessageError::InvalidInput(msg)) => {
            warn!("Rejected contact message: {}", msg);
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
