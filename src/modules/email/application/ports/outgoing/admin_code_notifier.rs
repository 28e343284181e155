#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminCodeNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Delivers a one-time sign-in code to the administrator.
#[async_trait::async_trait]
pub trait AdminCodeNotifier: Send + Sync {
    async fn send_admin_code(
        &self,
        to: &str,
        code: &str,
        valid_for_seconds: u64,
    ) -> Result<(), AdminCodeNotificationError>;
}
