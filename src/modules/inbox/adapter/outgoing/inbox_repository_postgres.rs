use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::inbox::adapter::outgoing::sea_orm_entity::{contact_messages, job_offers};
use crate::modules::inbox::application::ports::outgoing::{InboxRepository, InboxRepositoryError};
use crate::modules::inbox::domain::{
    ContactMessage, JobOffer, NewContactMessage, NewJobOffer, STATUS_NEW,
};

#[derive(Clone)]
pub struct InboxRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InboxRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InboxRepository for InboxRepositoryPostgres {
    async fn save_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, InboxRepositoryError> {
        let model = contact_messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            status: Set(STATUS_NEW.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(ContactMessage {
            id: saved.id,
            name: saved.name,
            email: saved.email,
            subject: saved.subject,
            message: saved.message,
            status: saved.status,
            created_at: saved.created_at.into(),
        })
    }

    async fn save_job_offer(&self, offer: NewJobOffer) -> Result<JobOffer, InboxRepositoryError> {
        let model = job_offers::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_name: Set(offer.company_name),
            contact_email: Set(offer.contact_email),
            contact_name: Set(offer.contact_name),
            job_title: Set(offer.job_title),
            job_type: Set(offer.job_type),
            location: Set(offer.location),
            salary_range: Set(offer.salary_range),
            job_description: Set(offer.job_description),
            message: Set(offer.message),
            status: Set(STATUS_NEW.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(JobOffer {
            id: saved.id,
            company_name: saved.company_name,
            contact_email: saved.contact_email,
            contact_name: saved.contact_name,
            job_title: saved.job_title,
            job_type: saved.job_type,
            location: saved.location,
            salary_range: saved.salary_range,
            job_description: saved.job_description,
            message: saved.message,
            status: saved.status,
            created_at: saved.created_at.into(),
        })
    }
}

fn map_db_err(e: DbErr) -> InboxRepositoryError {
    InboxRepositoryError::DatabaseError(e.to_string())
}
