use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::inbox::domain::{NewContactMessage, NewJobOffer, SubmissionReceipt};
use crate::site::notifications::Notifications;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{0}")]
    Invalid(String),

    #[error("Could not send: {0}")]
    RemoteWriteFailed(String),

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Write-only channels for public visitors.
#[async_trait]
pub trait IntakeBackend: Send + Sync {
    async fn submit_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<SubmissionReceipt, IntakeError>;

    async fn submit_job_offer(&self, offer: NewJobOffer) -> Result<SubmissionReceipt, IntakeError>;
}

/// A draft that knows how to check and send itself.
#[async_trait]
pub trait Submission: Clone + Default + Send + Sync + 'static {
    /// Shown to the visitor after a successful send.
    const CONFIRMATION: &'static str;

    fn check(&self) -> Result<(), IntakeError>;

    async fn send(self, backend: &dyn IntakeBackend) -> Result<SubmissionReceipt, IntakeError>;
}

#[async_trait]
impl Submission for NewContactMessage {
    const CONFIRMATION: &'static str = "Thanks! Your message was sent";

    fn check(&self) -> Result<(), IntakeError> {
        self.validate()
            .map_err(|e| IntakeError::Invalid(e.to_string()))
    }

    async fn send(self, backend: &dyn IntakeBackend) -> Result<SubmissionReceipt, IntakeError> {
        backend.submit_contact_message(self).await
    }
}

#[async_trait]
impl Submission for NewJobOffer {
    const CONFIRMATION: &'static str = "Thanks! Your job offer was sent";

    fn check(&self) -> Result<(), IntakeError> {
        self.validate()
            .map_err(|e| IntakeError::Invalid(e.to_string()))
    }

    async fn send(self, backend: &dyn IntakeBackend) -> Result<SubmissionReceipt, IntakeError> {
        backend.submit_job_offer(self).await
    }
}

/// Form state for one intake channel.
///
/// Cleared after a successful send; kept as typed when sending fails.
pub struct IntakeForm<D: Submission> {
    backend: Arc<dyn IntakeBackend>,
    notifications: Notifications,
    draft: Mutex<D>,
    submitting: AtomicBool,
}

pub type ContactForm = IntakeForm<NewContactMessage>;
pub type JobOfferForm = IntakeForm<NewJobOffer>;

impl<D: Submission> IntakeForm<D> {
    pub fn new(backend: Arc<dyn IntakeBackend>, notifications: Notifications) -> Self {
        Self {
            backend,
            notifications,
            draft: Mutex::new(D::default()),
            submitting: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, D> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn draft(&self) -> D {
        self.lock().clone()
    }

    pub fn edit(&self, f: impl FnOnce(&mut D)) {
        f(&mut self.lock());
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub async fn submit(&self) -> Result<SubmissionReceipt, IntakeError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(IntakeError::AlreadySubmitting);
        }

        let result = self.send_current().await;
        self.submitting.store(false, Ordering::SeqCst);

        match result {
            Ok(receipt) => {
                *self.lock() = D::default();
                self.notifications.info(D::CONFIRMATION);
                Ok(receipt)
            }
            Err(e) => {
                self.notifications.error(e.to_string());
                Err(e)
            }
        }
    }

    async fn send_current(&self) -> Result<SubmissionReceipt, IntakeError> {
        let draft = self.draft();
        draft.check()?;
        draft.send(self.backend.as_ref()).await
    }
}
