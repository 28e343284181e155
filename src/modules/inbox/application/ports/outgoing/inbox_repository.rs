use async_trait::async_trait;

use crate::modules::inbox::domain::{ContactMessage, JobOffer, NewContactMessage, NewJobOffer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InboxRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only storage for public submissions. Nothing is read back through here.
#[async_trait]
pub trait InboxRepository: Send + Sync {
    async fn save_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, InboxRepositoryError>;

    async fn save_job_offer(&self, offer: NewJobOffer) -> Result<JobOffer, InboxRepositoryError>;
}
