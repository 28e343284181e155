use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    RequestAdminCodeUseCase, VerifyAdminCodeUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub request_code: Arc<dyn RequestAdminCodeUseCase + Send + Sync>,
    pub verify_code: Arc<dyn VerifyAdminCodeUseCase + Send + Sync>,
}
