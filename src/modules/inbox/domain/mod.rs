pub mod entities;

pub use entities::{
    ContactMessage, IntakeValidationError, JobOffer, JobType, NewContactMessage, NewJobOffer,
    SubmissionReceipt, STATUS_NEW,
};
