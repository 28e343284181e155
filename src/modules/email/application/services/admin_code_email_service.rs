use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::email::application::ports::outgoing::{
    AdminCodeNotificationError, AdminCodeNotifier, EmailSender,
};

const SUBJECT: &str = "Your portfolio admin sign-in code";

#[derive(Clone)]
pub struct AdminCodeEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for AdminCodeEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCodeEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl AdminCodeEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_body(code: &str, valid_for_seconds: u64) -> String {
        let minutes = valid_for_seconds.div_ceil(60).max(1);
        format!(
            r#"<!DOCTYPE html>
<html>
  <body style="font-family: sans-serif; line-height: 1.5;">
    <h2>Admin sign-in</h2>
    <p>Use the following code to enter admin mode:</p>
    <p style="font-size: 28px; font-weight: bold; letter-spacing: 6px;">{code}</p>
    <p>The code expires in {minutes} minute(s) and can be used once.</p>
    <p>If you did not request it, you can ignore this email.</p>
  </body>
</html>"#
        )
    }
}

#[async_trait]
impl AdminCodeNotifier for AdminCodeEmailService {
    async fn send_admin_code(
        &self,
        to: &str,
        code: &str,
        valid_for_seconds: u64,
    ) -> Result<(), AdminCodeNotificationError> {
        let body = Self::render_body(code, valid_for_seconds);

        self.sender
            .send_email(to, SUBJECT, &body)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send admin sign-in code");
                AdminCodeNotificationError::EmailSendingFailed(e.to_string())
            })?;

        info!("Admin sign-in code sent");
        Ok(())
    }
}
