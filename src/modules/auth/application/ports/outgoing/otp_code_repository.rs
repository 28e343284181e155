use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpCodeRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Pending one-time codes, keyed by normalized email.
///
/// At most one code per email: saving replaces any previous code.
#[async_trait]
pub trait OtpCodeRepository: Send + Sync {
    async fn save_code(
        &self,
        email: &str,
        code_hash: &str,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeRepositoryError>;

    /// Digest of the pending code, `None` when absent or expired.
    async fn find_code(&self, email: &str) -> Result<Option<String>, OtpCodeRepositoryError>;

    /// Removes the pending code. Returns `false` if there was none.
    async fn consume_code(&self, email: &str) -> Result<bool, OtpCodeRepositoryError>;
}
