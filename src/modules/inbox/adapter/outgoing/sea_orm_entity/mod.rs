pub mod contact_messages;
pub mod job_offers;
