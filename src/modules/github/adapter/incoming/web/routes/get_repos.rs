use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::github::application::ports::incoming::use_cases::GetRepoFeedError;
use crate::modules::github::domain::FeedPage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// 1-based; clamped to the last page
    pub page: Option<u32>,
}

/// Public. One page of repositories with generated summaries.
#[utoipa::path(
    get,
    path = "/api/github/repos",
    tag = "github",
    params(FeedQuery),
    responses(
        (status = 200, description = "One feed page", body = inline(SuccessResponse<FeedPage>)),
        (status = 502, description = "GitHub unreachable", body = ErrorResponse),
    )
)]
#[get("/api/github/repos")]
pub async fn get_repos_handler(
    query: web::Query<FeedQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.page.unwrap_or(1);

    match data.github.get_feed.execute(page).await {
        Ok(feed) => ApiResponse::success(feed),
        Err(GetRepoFeedError::Unavailable(_)) => ApiResponse::bad_gateway(
            "FEED_UNAVAILABLE",
            "Could not load repositories from GitHub",
        ),
    }
}
