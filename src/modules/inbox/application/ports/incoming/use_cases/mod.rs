mod submit_contact_message;
mod submit_job_offer;

pub use submit_contact_message::{SubmitContactMessageError, SubmitContactMessageUseCase};
pub use submit_job_offer::{SubmitJobOfferError, SubmitJobOfferUseCase};
