use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    OtpCodeRepository, OtpCodeRepositoryError,
};

/// Redis-backed implementation of `OtpCodeRepository`.
///
/// ## Redis data model
/// ```text
/// auth:otp:{email} -> "{sha256 hex of the code}"
/// ```
/// - One key per email; a new request overwrites the pending code
/// - TTL = code validity, so expired codes disappear on their own
/// - `DEL` reports whether the key existed, which makes consumption single-use
///   even when two verifications race
#[derive(Clone)]
pub struct RedisOtpCodeRepository {
    pool: Arc<Pool>,
}

impl RedisOtpCodeRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn code_key(email: &str) -> String {
        format!("auth:otp:{email}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, OtpCodeRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| OtpCodeRepositoryError::StorageError(format!("Pool error: {}", e)))
    }
}

fn map_redis_err(e: deadpool_redis::redis::RedisError) -> OtpCodeRepositoryError {
    OtpCodeRepositoryError::StorageError(e.to_string())
}

#[async_trait]
impl OtpCodeRepository for RedisOtpCodeRepository {
    async fn save_code(
        &self,
        email: &str,
        code_hash: &str,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeRepositoryError> {
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::code_key(email), code_hash, ttl_seconds.max(1))
            .await
            .map_err(map_redis_err)
    }

    async fn find_code(&self, email: &str) -> Result<Option<String>, OtpCodeRepositoryError> {
        let mut conn = self.get_conn().await?;

        conn.get::<_, Option<String>>(Self::code_key(email))
            .await
            .map_err(map_redis_err)
    }

    async fn consume_code(&self, email: &str) -> Result<bool, OtpCodeRepositoryError> {
        let mut conn = self.get_conn().await?;

        let removed: i64 = conn
            .del(Self::code_key(email))
            .await
            .map_err(map_redis_err)?;

        Ok(removed > 0)
    }
}
