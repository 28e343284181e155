use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::modules::inbox::application::ports::outgoing::{InboxRepository, InboxRepositoryError};
use crate::modules::inbox::domain::{
    ContactMessage, JobOffer, NewContactMessage, NewJobOffer, STATUS_NEW,
};

#[derive(Default)]
struct Inbox {
    messages: Vec<ContactMessage>,
    offers: Vec<JobOffer>,
}

/// Process-local inbox. Clones share the same submissions.
#[derive(Clone, Default)]
pub struct InMemoryInboxRepository {
    inbox: Arc<Mutex<Inbox>>,
}

impl InMemoryInboxRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inbox> {
        self.inbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn contact_messages(&self) -> Vec<ContactMessage> {
        self.lock().messages.clone()
    }

    pub fn job_offers(&self) -> Vec<JobOffer> {
        self.lock().offers.clone()
    }
}

#[async_trait]
impl InboxRepository for InMemoryInboxRepository {
    async fn save_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, InboxRepositoryError> {
        let saved = ContactMessage {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        };
        self.lock().messages.push(saved.clone());
        Ok(saved)
    }

    async fn save_job_offer(&self, offer: NewJobOffer) -> Result<JobOffer, InboxRepositoryError> {
        let saved = JobOffer {
            id: Uuid::new_v4(),
            company_name: offer.company_name,
            contact_email: offer.contact_email,
            contact_name: offer.contact_name,
            job_title: offer.job_title,
            job_type: offer.job_type,
            location: offer.location,
            salary_range: offer.salary_range,
            job_description: offer.job_description,
            message: offer.message,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        };
        self.lock().offers.push(saved.clone());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saved_submissions_start_as_new() {
        let repo = InMemoryInboxRepository::new();

        let msg = repo
            .save_contact_message(NewContactMessage {
                name: "Noa".into(),
                email: "noa@example.com".into(),
                subject: None,
                message: "hi".into(),
            })
            .await
            .unwrap();

        assert_eq!(msg.status, STATUS_NEW);
        assert_eq!(repo.contact_messages(), vec![msg]);
        assert!(repo.job_offers().is_empty());
    }
}
