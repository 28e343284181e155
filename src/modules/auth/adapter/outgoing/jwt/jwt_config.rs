/// `iss` claim on every admin session token.
pub const SESSION_ISSUER: &str = "portfolio";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub session_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, session_ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            issuer: SESSION_ISSUER.to_string(),
            session_ttl_seconds,
        }
    }
}
