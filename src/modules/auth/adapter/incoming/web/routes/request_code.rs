use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::RequestAdminCodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RequestCodeRequest {
    #[schema(example = "rivka.dev@email.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CodeSent {
    message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/request-code",
    tag = "auth",
    request_body = RequestCodeRequest,
    responses(
        (status = 202, description = "Code mailed to the administrator", body = inline(SuccessResponse<CodeSent>)),
        (status = 403, description = "Address is not the administrator", body = ErrorResponse),
        (status = 502, description = "Mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/request-code")]
pub async fn request_code_handler(
    req: web::Json<RequestCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.request_code.execute(&req.email).await {
        Ok(()) => ApiResponse::accepted(CodeSent {
            message: "A sign-in code was sent to the administrator address".to_string(),
        }),

        Err(RequestAdminCodeError::UnauthorizedEmail) => ApiResponse::forbidden(
            "UNAUTHORIZED_EMAIL",
            "This email is not authorized for admin access",
        ),

        Err(RequestAdminCodeError::DeliveryFailed(msg)) => {
            error!("Failed to deliver admin code: {}", msg);
            ApiResponse::bad_gateway("CODE_DELIVERY_FAILED", "Could not send the sign-in code")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubRequestAdminCodeUseCase;

    async fn post_email(stub: StubRequestAdminCodeUseCase, email: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_request_admin_code(stub)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(request_code_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/request-code")
            .set_json(json!({ "email": email }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_request_code_accepted() {
        let (status, body) = post_email(
            StubRequestAdminCodeUseCase::returning(Ok(())),
            "owner@example.com",
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["success"], true);
        assert!(body["data"]["message"].is_string());
    }

    #[actix_web::test]
    async fn test_request_code_unauthorized_email() {
        let (status, body) = post_email(
            StubRequestAdminCodeUseCase::returning(Err(RequestAdminCodeError::UnauthorizedEmail)),
            "visitor@example.com",
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED_EMAIL");
    }

    #[actix_web::test]
    async fn test_request_code_delivery_failure() {
        let (status, body) = post_email(
            StubRequestAdminCodeUseCase::returning(Err(RequestAdminCodeError::DeliveryFailed(
                "smtp down".to_string(),
            ))),
            "owner@example.com",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "CODE_DELIVERY_FAILED");
    }
}
