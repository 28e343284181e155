use email_address::EmailAddress;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Authorized address
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email address: {0}")]
pub struct InvalidEmail(pub String);

/// The single address allowed to enter admin mode.
///
/// Stored trimmed and lowercased; candidates are compared the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEmail(String);

impl AdminEmail {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let trimmed = raw.trim();
        if !EmailAddress::is_valid(trimmed) {
            return Err(InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, candidate: &str) -> bool {
        candidate.trim().to_lowercase() == self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// One-time code
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub const LENGTH: usize = 6;

    /// Six ASCII digits, leading zeros kept.
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
        Self(format!("{:06}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hash(&self) -> String {
        hash_code(&self.0)
    }
}

/// SHA-256 hex digest. Only digests are ever stored.
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}

//
// ──────────────────────────────────────────────────────────
// Session payloads
// ──────────────────────────────────────────────────────────
//

/// Issued after a successful code verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminGrant {
    pub access_token: String,
    pub email: String,
    /// Seconds until `access_token` expires.
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminIdentity {
    pub email: String,
    pub is_administrator: bool,
}
