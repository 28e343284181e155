use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl Error for TokenError {}

/// JWT claims for an administrator session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String, // admin email
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String,
    pub is_admin: bool,
}

pub trait TokenProvider: Send + Sync {
    fn issue_admin_token(&self, email: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
    /// Lifetime of tokens from `issue_admin_token`, in seconds.
    fn access_token_ttl(&self) -> i64;
}
