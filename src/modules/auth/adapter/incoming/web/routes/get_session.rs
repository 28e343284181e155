use actix_web::{get, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::domain::AdminIdentity;
use crate::shared::api::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Token belongs to the administrator", body = inline(SuccessResponse<AdminIdentity>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(AdminIdentity {
        email: admin.email,
        is_administrator: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use crate::tests::support::auth_helper::{admin_bearer, token_provider};

    #[actix_web::test]
    async fn test_session_reports_identity() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "owner@example.com");
        assert_eq!(body["data"]["is_administrator"], true);
    }

    #[actix_web::test]
    async fn test_session_without_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
