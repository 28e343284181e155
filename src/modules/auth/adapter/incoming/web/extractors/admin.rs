use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// The administrator behind a valid bearer token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(create_api_error))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AdminUser, HttpResponse> {
    let tokens = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(ApiResponse::internal_error)?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )
    })?;

    let claims = tokens
        .verify_token(&token)
        .map_err(|_| ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token"))?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        ));
    }

    if !claims.is_admin {
        return Err(ApiResponse::forbidden(
            "NOT_ADMINISTRATOR",
            "Administrator access required",
        ));
    }

    Ok(AdminUser { email: claims.sub })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
