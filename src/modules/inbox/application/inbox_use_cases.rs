use std::sync::Arc;

use crate::modules::inbox::application::ports::incoming::use_cases::{
    SubmitContactMessageUseCase, SubmitJobOfferUseCase,
};

#[derive(Clone)]
pub struct InboxUseCases {
    pub submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub submit_job_offer: Arc<dyn SubmitJobOfferUseCase + Send + Sync>,
}
