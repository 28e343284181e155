// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Documented shape of a successful [`crate::shared::api::ApiResponse`].
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Documented shape of a failed [`crate::shared::api::ApiResponse`].
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code the site maps to a message
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "name must not be empty")]
    pub message: String,
}
