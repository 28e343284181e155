use std::env;
use std::str::FromStr;

use crate::modules::auth::domain::{AdminEmail, InvalidEmail};
use crate::modules::github::adapter::outgoing::github_api_client::DEFAULT_API_URL;

pub const DEFAULT_GITHUB_OWNER: &str = "rivka2211";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("ADMIN_EMAIL: {0}")]
    AdminEmail(#[from] InvalidEmail),
}

/// How sign-in codes leave the building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher (Mailpit, MailHog) when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub jwt_secret: String,
    pub jwt_access_expiry: i64,
    pub admin_email: AdminEmail,
    pub otp_ttl_seconds: u64,
    pub email_from: String,
    pub smtp: SmtpConfig,
    pub github_owner: String,
    pub github_api_url: String,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) then reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads every setting through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let or_default =
            |name: &'static str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let smtp = if lookup("RUST_ENV").as_deref() == Some("test") {
            SmtpConfig::Local {
                host: or_default("SMTP_HOST", "localhost"),
                port: parse("SMTP_PORT", or_default("SMTP_PORT", "1025"))?,
            }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        Ok(Self {
            host: or_default("HOST", "127.0.0.1"),
            port: parse("PORT", or_default("PORT", "8080"))?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_access_expiry: parse("JWT_ACCESS_EXPIRY", or_default("JWT_ACCESS_EXPIRY", "3600"))?,
            admin_email: AdminEmail::parse(&required("ADMIN_EMAIL")?)?,
            otp_ttl_seconds: parse("OTP_TTL_SECONDS", or_default("OTP_TTL_SECONDS", "600"))?,
            email_from: required("EMAIL_FROM")?,
            smtp,
            github_owner: or_default("GITHUB_OWNER", DEFAULT_GITHUB_OWNER),
            github_api_url: or_default("GITHUB_API_URL", DEFAULT_API_URL),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
