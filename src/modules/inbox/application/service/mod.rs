mod submit_contact_message_service;
mod submit_job_offer_service;

pub use submit_contact_message_service::SubmitContactMessageService;
pub use submit_job_offer_service::SubmitJobOfferService;
