mod submit_contact_message;
mod submit_job_offer;

pub use submit_contact_message::{
    __path_submit_contact_message_handler, submit_contact_message_handler,
};
pub use submit_job_offer::{__path_submit_job_offer_handler, submit_job_offer_handler};
