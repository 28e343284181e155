mod admin_code_email_service;

pub use admin_code_email_service::AdminCodeEmailService;
