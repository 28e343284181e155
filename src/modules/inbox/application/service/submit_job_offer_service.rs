use async_trait::async_trait;
use tracing::info;

use crate::modules::inbox::application::ports::incoming::use_cases::{
    SubmitJobOfferError, SubmitJobOfferUseCase,
};
use crate::modules::inbox::application::ports::outgoing::{InboxRepository, InboxRepositoryError};
use crate::modules::inbox::domain::{NewJobOffer, SubmissionReceipt};

pub struct SubmitJobOfferService<R>
where
    R: InboxRepository,
{
    repository: R,
}

impl<R> SubmitJobOfferService<R>
where
    R: InboxRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitJobOfferUseCase for SubmitJobOfferService<R>
where
    R: InboxRepository,
{
    async fn execute(&self, offer: NewJobOffer) -> Result<SubmissionReceipt, SubmitJobOfferError> {
        offer
            .validate()
            .map_err(|e| SubmitJobOfferError::InvalidInput(e.to_string()))?;

        let saved = self
            .repository
            .save_job_offer(offer.normalized())
            .await
            .map_err(|e| match e {
                InboxRepositoryError::DatabaseError(msg) => SubmitJobOfferError::RepositoryError(msg),
            })?;

        info!(offer_id = %saved.id, company = %saved.company_name, "Job offer received");
        Ok(SubmissionReceipt::from(&saved))
    }
}
