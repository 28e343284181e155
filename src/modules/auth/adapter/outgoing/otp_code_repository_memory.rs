use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::modules::auth::application::ports::outgoing::{
    OtpCodeRepository, OtpCodeRepositoryError,
};

struct PendingCode {
    code_hash: String,
    expires_at: Instant,
}

/// Process-local code store for single-instance setups and tests.
#[derive(Clone, Default)]
pub struct InMemoryOtpCodeRepository {
    codes: Arc<Mutex<HashMap<String, PendingCode>>>,
}

impl InMemoryOtpCodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PendingCode>> {
        self.codes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OtpCodeRepository for InMemoryOtpCodeRepository {
    async fn save_code(
        &self,
        email: &str,
        code_hash: &str,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeRepositoryError> {
        self.lock().insert(
            email.to_string(),
            PendingCode {
                code_hash: code_hash.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn find_code(&self, email: &str) -> Result<Option<String>, OtpCodeRepositoryError> {
        let mut codes = self.lock();
        match codes.get(email) {
            Some(pending) if pending.expires_at > Instant::now() => {
                Ok(Some(pending.code_hash.clone()))
            }
            Some(_) => {
                codes.remove(email);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn consume_code(&self, email: &str) -> Result<bool, OtpCodeRepositoryError> {
        Ok(self.lock().remove(email).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryOtpCodeRepository::new();
        repo.save_code("a@b.c", "hash", 60).await.unwrap();

        assert_eq!(repo.find_code("a@b.c").await.unwrap(), Some("hash".into()));
        assert_eq!(repo.find_code("x@b.c").await.unwrap(), None);
    }

    #[tokio::test]
    async fn newer_code_replaces_older() {
        let repo = InMemoryOtpCodeRepository::new();
        repo.save_code("a@b.c", "first", 60).await.unwrap();
        repo.save_code("a@b.c", "second", 60).await.unwrap();

        assert_eq!(repo.find_code("a@b.c").await.unwrap(), Some("second".into()));
    }

    #[tokio::test]
    async fn zero_ttl_is_already_expired() {
        let repo = InMemoryOtpCodeRepository::new();
        repo.save_code("a@b.c", "hash", 0).await.unwrap();

        assert_eq!(repo.find_code("a@b.c").await.unwrap(), None);
    }

    #[tokio::test]
    async fn consume_is_single_shot() {
        let repo = InMemoryOtpCodeRepository::new();
        repo.save_code("a@b.c", "hash", 60).await.unwrap();

        assert!(repo.consume_code("a@b.c").await.unwrap());
        assert!(!repo.consume_code("a@b.c").await.unwrap());
        assert_eq!(repo.find_code("a@b.c").await.unwrap(), None);
    }
}
