use std::sync::Arc;

use crate::modules::profile::application::use_cases::get_profile::IGetProfileUseCase;
use crate::modules::profile::application::use_cases::update_profile::IUpdateProfileUseCase;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn IGetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
}
