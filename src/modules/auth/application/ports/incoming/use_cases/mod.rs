mod request_admin_code;
mod verify_admin_code;

pub use request_admin_code::{RequestAdminCodeError, RequestAdminCodeUseCase};
pub use verify_admin_code::{VerifyAdminCodeError, VerifyAdminCodeUseCase};
