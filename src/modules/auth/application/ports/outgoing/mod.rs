pub mod otp_code_repository;
pub mod otp_provider;
pub mod token_provider;

pub use otp_code_repository::{OtpCodeRepository, OtpCodeRepositoryError};
pub use otp_provider::{OtpProvider, OtpProviderError};
pub use token_provider::{AdminClaims, TokenError, TokenProvider};
