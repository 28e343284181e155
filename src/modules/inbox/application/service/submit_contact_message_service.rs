use async_trait::async_trait;
use tracing::info;

use crate::modules::inbox::application::ports::incoming::use_cases::{
    SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::inbox::application::ports::outgoing::{InboxRepository, InboxRepositoryError};
use crate::modules::inbox::domain::{NewContactMessage, SubmissionReceipt};

pub struct SubmitContactMessageService<R>
where
    R: InboxRepository,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: InboxRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: InboxRepository,
{
    async fn execute(
        &self,
        message: NewContactMessage,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError> {
        message
            .validate()
            .map_err(|e| SubmitContactMessageError::InvalidInput(e.to_string()))?;

        let saved = self
            .repository
            .save_contact_message(message.normalized())
            .await
            .map_err(|e| match e {
                InboxRepositoryError::DatabaseError(msg) => {
                    SubmitContactMessageError::RepositoryError(msg)
                }
            })?;

        info!(message_id = %saved.id, "Contact message received");
        Ok(SubmissionReceipt::from(&saved))
    }
}
