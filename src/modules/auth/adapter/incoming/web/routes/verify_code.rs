use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::VerifyAdminCodeError;
use crate::modules::auth::domain::AdminGrant;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct VerifyCodeRequest {
    #[schema(example = "rivka.dev@email.com")]
    pub email: String,
    #[schema(example = "482913")]
    pub code: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/verify-code",
    tag = "auth",
    request_body = VerifyCodeRequest,
    responses(
        (status = 200, description = "Admin session granted", body = inline(SuccessResponse<AdminGrant>)),
        (status = 401, description = "Wrong or expired code", body = ErrorResponse),
        (status = 403, description = "Address is not the administrator", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-code")]
pub async fn verify_code_handler(
    req: web::Json<VerifyCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.verify_code.execute(&req.email, &req.code).await {
        Ok(grant) => ApiResponse::success(grant),

        Err(VerifyAdminCodeError::UnauthorizedEmail) => ApiResponse::forbidden(
            "UNAUTHORIZED_EMAIL",
            "This email is not authorized for admin access",
        ),

        Err(VerifyAdminCodeError::InvalidCode) => {
            ApiResponse::unauthorized("INVALID_CODE", "The code is invalid or has expired")
        }

        Err(VerifyAdminCodeError::ProviderUnavailable(msg)) => {
            error!("Code provider unavailable: {}", msg);
            ApiResponse::internal_error()
        }

        Err(VerifyAdminCodeError::TokenIssueFailed(msg)) => {
            error!("Token issue failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::auth::domain::AdminGrant;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubVerifyAdminCodeUseCase;

    async fn post_code(stub: StubVerifyAdminCodeUseCase) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_verify_admin_code(stub)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(verify_code_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/verify-code")
            .set_json(json!({ "email": "owner@example.com", "code": "123456" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_verify_code_returns_grant() {
        let grant = AdminGrant {
            access_token: "jwt".to_string(),
            email: "owner@example.com".to_string(),
            expires_in: 3600,
        };

        let (status, body) = post_code(StubVerifyAdminCodeUseCase::returning(Ok(grant))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["access_token"], "jwt");
        assert_eq!(body["data"]["email"], "owner@example.com");
        assert_eq!(body["data"]["expires_in"], 3600);
    }

    #[actix_web::test]
    async fn test_verify_code_invalid() {
        let (status, body) = post_code(StubVerifyAdminCodeUseCase::returning(Err(
            VerifyAdminCodeError::InvalidCode,
        )))
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CODE");
    }

    #[actix_web::test]
    async fn test_verify_code_unauthorized_email() {
        let (status, body) = post_code(StubVerifyAdminCodeUseCase::returning(Err(
            VerifyAdminCodeError::UnauthorizedEmail,
        )))
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED_EMAIL");
    }

    #[actix_web::test]
    async fn test_verify_code_provider_outage() {
        let (status, body) = post_code(StubVerifyAdminCodeUseCase::returning(Err(
            VerifyAdminCodeError::ProviderUnavailable("redis".to_string()),
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
