mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, SESSION_ISSUER};
pub use jwt_service::JwtTokenService;
