use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSendError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("message build failed: {0}")]
    Build(String),

    #[error("transport failed: {0}")]
    Transport(String),
}

/// Sends a single HTML message.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError>;
}
