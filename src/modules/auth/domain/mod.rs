pub mod entities;

pub use entities::{hash_code, AdminEmail, AdminGrant, AdminIdentity, InvalidEmail, OtpCode};
