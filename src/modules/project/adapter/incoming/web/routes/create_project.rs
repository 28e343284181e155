use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::domain::{NewProject, Project};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid project", body = ErrorResponse),
        (status = 401, description = "Not signed in as administrator", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<NewProject>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => {
            info!(project_id = %created.id, "Project created");
            ApiResponse::created(created)
        }

        Err(CreateProjectError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::project::application::ports::incoming::use_cases::CreateProjectUseCase;
    use crate::modules::project::domain::Project;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider};
    use crate::tests::support::project_fixtures::sample_project;

    /* --------------------------------------------------
     * Mock CreateProjectUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<Project, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(&self, _data: NewProject) -> Result<Project, CreateProjectError> {
            self.result.clone()
        }
    }

    fn body() -> Value {
        json!({
            "name": "Portfolio",
            "description": "Personal site",
            "technologies": ["React", "Node.js"],
            "status": "in-progress"
        })
    }

    async fn send(
        uc: MockCreateProjectUseCase,
        auth: Option<String>,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default().with_create_project(uc).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(create_project_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/projects").set_json(body());
        if let Some(value) = auth {
            req = req.insert_header(("Authorization", value));
        }

        test::call_service(&app, req.to_request()).await
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_success() {
        let project = sample_project();
        let resp = send(
            MockCreateProjectUseCase {
                result: Ok(project.clone()),
            },
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], project.id.to_string());
        assert_eq!(body["data"]["name"], project.name);
    }

    #[actix_web::test]
    async fn test_create_project_requires_admin() {
        let resp = send(
            MockCreateProjectUseCase {
                result: Ok(sample_project()),
            },
            None,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_project_validation_error() {
        let resp = send(
            MockCreateProjectUseCase {
                result: Err(CreateProjectError::InvalidInput(
                    "name must not be empty".to_string(),
                )),
            },
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "name must not be empty");
    }

    #[actix_web::test]
    async fn test_create_project_repository_error() {
        let resp = send(
            MockCreateProjectUseCase {
                result: Err(CreateProjectError::RepositoryError("db".to_string())),
            },
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
