mod email_otp_provider;
mod request_admin_code_service;
mod verify_admin_code_service;

pub use email_otp_provider::EmailOtpProvider;
pub use request_admin_code_service::RequestAdminCodeService;
pub use verify_admin_code_service::VerifyAdminCodeService;
